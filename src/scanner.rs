use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// File scanner for traversing Java project directories.
///
/// The `FileScanner` recursively walks through a project directory to find all Java source
/// files. Every directory is descended into; the only exclusion is any file whose path below
/// the root contains `test` or `Test`, which keeps `src/test/java` and `*Test.java` files out
/// of the scan.
///
/// Entries are visited sorted by file name so repeated scans of the same tree yield the
/// same order.
///
/// # Example
///
/// ```no_run
/// use springboot_analyzer::scanner::FileScanner;
/// use std::path::PathBuf;
///
/// let scanner = FileScanner::new(PathBuf::from("./my-service"));
/// let result = scanner.scan().unwrap();
/// println!("Found {} Java files", result.java_files.len());
/// ```
pub struct FileScanner {
    root_path: PathBuf,
}

/// Result of directory scanning operation.
///
/// Contains the list of discovered Java files and any warnings encountered during scanning.
pub struct SourceFiles {
    /// List of paths to all discovered `.java` files, in traversal order
    pub java_files: Vec<PathBuf>,
    /// Warning messages for any issues encountered (e.g., inaccessible directories)
    pub warnings: Vec<String>,
}

impl FileScanner {
    /// Creates a new `FileScanner` for the specified root directory.
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Scans the directory tree and collects all non-test `.java` files.
    ///
    /// If any directories or files cannot be accessed, warnings are logged and added to
    /// the result, but scanning continues.
    ///
    /// # Errors
    ///
    /// Returns an error if the root path does not exist or is not a directory.
    pub fn scan(&self) -> Result<SourceFiles> {
        if !self.root_path.is_dir() {
            return Err(Error::InvalidArgument(format!(
                "Project path is not a directory: {}",
                self.root_path.display()
            )));
        }

        let mut java_files = Vec::new();
        let mut warnings = Vec::new();

        for entry in WalkDir::new(&self.root_path).sort_by_file_name() {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if !entry.file_type().is_file()
                        || path.extension().and_then(|s| s.to_str()) != Some("java")
                    {
                        continue;
                    }
                    if self.is_test_source(path) {
                        debug!("Skipping test source: {}", path.display());
                        continue;
                    }
                    java_files.push(path.to_path_buf());
                }
                Err(e) => {
                    // Record warning for inaccessible directories/files
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        Ok(SourceFiles {
            java_files,
            warnings,
        })
    }

    /// Coarse test-source heuristic on the path below the root.
    fn is_test_source(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root_path).unwrap_or(path);
        let relative = relative.to_string_lossy();
        relative.contains("test") || relative.contains("Test")
    }
}
