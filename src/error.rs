use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the library
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error in {}: {message}", file.display())]
    Parse { file: PathBuf, message: String },

    #[error("Failed to load Java grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_file() {
        let err = Error::Parse {
            file: PathBuf::from("src/main/java/Broken.java"),
            message: "syntax error at line 3, column 5".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("Broken.java"));
        assert!(msg.contains("line 3"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("gone"));
    }
}
