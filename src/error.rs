//! Error types for mdpost

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mdpost
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Metadata block error: opening '---' has no closing '---' or '...'")]
    UnterminatedMetadata,

    #[error("Metadata block error: {0}")]
    Decode(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Source directory not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IngestError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            IngestError::SourceNotFound(_) => 2,
            IngestError::Config(_) => 3,
            _ => 1,
        }
    }

    /// Whether this error came from the metadata block rather than the file or renderer
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            IngestError::UnterminatedMetadata | IngestError::Decode(_)
        )
    }
}

impl From<serde_yaml::Error> for IngestError {
    fn from(err: serde_yaml::Error) -> Self {
        IngestError::Decode(err.to_string())
    }
}

/// Result type using IngestError
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            IngestError::SourceNotFound(PathBuf::from("Markdowns")).exit_code(),
            2
        );
        assert_eq!(IngestError::Config("bad".to_string()).exit_code(), 3);
        assert_eq!(IngestError::Render("boom".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_read_error_names_path() {
        let err = IngestError::Read {
            path: PathBuf::from("Markdowns/missing.md"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("Markdowns/missing.md"));
        assert!(msg.contains("No such file"));
        assert!(!err.is_decode_error());
    }

    #[test]
    fn test_decode_error_classification() {
        assert!(IngestError::UnterminatedMetadata.is_decode_error());
        assert!(IngestError::Decode("bad yaml".to_string()).is_decode_error());
        assert!(!IngestError::Render("boom".to_string()).is_decode_error());
    }
}
