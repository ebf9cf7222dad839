//! Domain errors for the proctor orchestrator.

use std::path::PathBuf;

use thiserror::Error;

/// Domain-level errors that abort a run.
///
/// Per-test failures are never errors: they are recorded as statuses in
/// the result store and the run continues. Only run-level conditions
/// (missing build tree, unwritable report) surface here.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Build directory not found: {}", .0.display())]
    BuildDirNotFound(PathBuf),

    #[error("Failed to write report to {}: {source}", .path.display())]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_dir_not_found_display() {
        let err = DomainError::BuildDirNotFound(PathBuf::from("./build"));
        assert_eq!(err.to_string(), "Build directory not found: ./build");
    }

    #[test]
    fn test_report_write_display_names_path() {
        let err = DomainError::ReportWrite {
            path: PathBuf::from("/tmp/out/test_results.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/out/test_results.json"));
        assert!(msg.contains("denied"));
    }
}
