//! Project analysis: classify every Java file and extract its component.
//!
//! The [`ProjectAnalyzer`] drives one full, stateless scan of a project tree. Files are
//! processed one at a time in traversal order; each is classified from its raw text and,
//! when it falls into a category, parsed and handed to the matching extractor. Failures are
//! confined to the file they happen in: they are logged, recorded as a [`Diagnostic`] and
//! the scan moves on.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::classifier::{classify, Category};
use crate::error::Result;
use crate::extractor::controller::ControllerExtractor;
use crate::extractor::entity::EntityExtractor;
use crate::extractor::repository::RepositoryExtractor;
use crate::extractor::service::ServiceExtractor;
use crate::extractor::ComponentExtractor;
use crate::model::ScanResult;
use crate::parser::AstParser;
use crate::scanner::FileScanner;

/// A per-file failure that did not stop the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| self.path.to_string_lossy());
        write!(f, "Error parsing: {} - {}", name, self.message)
    }
}

/// Outcome of a full project scan.
#[derive(Debug, Default)]
pub struct Analysis {
    /// The aggregate that gets serialized
    pub result: ScanResult,
    /// Files that could not be read or parsed
    pub diagnostics: Vec<Diagnostic>,
    /// Traversal warnings (inaccessible directories and the like)
    pub warnings: Vec<String>,
    pub files_scanned: usize,
    pub files_classified: usize,
}

pub struct ProjectAnalyzer {
    root_path: PathBuf,
}

impl ProjectAnalyzer {
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Scans the project and extracts every recognized component.
    ///
    /// # Errors
    ///
    /// Only a missing or unusable root directory is an error; per-file problems end up in
    /// [`Analysis::diagnostics`].
    pub fn analyze(&self) -> Result<Analysis> {
        info!("Scanning project directory: {}", self.root_path.display());
        let sources = FileScanner::new(self.root_path.clone()).scan()?;
        info!("Found {} Java files", sources.java_files.len());

        let mut analysis = Analysis {
            warnings: sources.warnings,
            ..Analysis::default()
        };

        for path in &sources.java_files {
            analysis.files_scanned += 1;

            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    let diagnostic = Diagnostic {
                        path: path.clone(),
                        message: format!("Failed to read file: {}", e),
                    };
                    warn!("{}", diagnostic);
                    analysis.diagnostics.push(diagnostic);
                    continue;
                }
            };

            match Self::analyze_source(path, &content, &mut analysis.result) {
                Ok(Some(_)) => analysis.files_classified += 1,
                Ok(None) => {}
                Err(e) => {
                    let diagnostic = Diagnostic {
                        path: path.clone(),
                        message: e.to_string(),
                    };
                    warn!("{}", diagnostic);
                    analysis.diagnostics.push(diagnostic);
                }
            }
        }

        let [controllers, services, repositories, entities] = analysis.result.counts();
        info!(
            "Extracted {} controllers, {} services, {} repositories, {} entities",
            controllers, services, repositories, entities
        );

        Ok(analysis)
    }

    /// Classifies one file and appends its component to `result`.
    ///
    /// Returns the category the file was routed to, or `None` for files without any
    /// recognized marker (those are never parsed).
    pub fn analyze_source(
        path: &Path,
        content: &str,
        result: &mut ScanResult,
    ) -> Result<Option<Category>> {
        let Some(category) = classify(content) else {
            return Ok(None);
        };
        debug!("{} classified as {}", path.display(), category.as_str());

        let parsed = AstParser::parse_source(path, content)?;

        let appended = match category {
            Category::Controller => append_named(
                &mut result.controllers,
                ControllerExtractor.extract(&parsed),
                |c| c.class_name.as_str(),
            ),
            Category::Service => append_named(
                &mut result.services,
                ServiceExtractor.extract(&parsed),
                |s| s.class_name.as_str(),
            ),
            Category::Repository => append_named(
                &mut result.repositories,
                RepositoryExtractor.extract(&parsed),
                |r| r.interface_name.as_str(),
            ),
            Category::Entity => append_named(
                &mut result.entities,
                EntityExtractor.extract(&parsed),
                |e| e.class_name.as_str(),
            ),
        };

        if !appended {
            debug!(
                "{} has no eligible {} declaration",
                path.display(),
                category.as_str()
            );
        }

        Ok(Some(category))
    }
}

/// Appends `item` when it exists and its identifying name is non-empty.
fn append_named<T>(list: &mut Vec<T>, item: Option<T>, name: impl Fn(&T) -> &str) -> bool {
    match item {
        Some(item) if !name(&item).is_empty() => {
            list.push(item);
            true
        }
        _ => false,
    }
}
