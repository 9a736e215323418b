//! Commit sink errors.

use super::error_code::{self, HammurabiErrorCode};

/// Errors raised while staging or committing rule output.
#[derive(Debug, thiserror::Error)]
pub enum CommitError {
    #[error("Cannot open repository at {path}: {message}")]
    Repository { path: String, message: String },

    #[error("Staging failed: {0}")]
    Staging(String),

    #[error("Commit failed: {0}")]
    Commit(String),

    #[error("No commit signature configured: {0}")]
    Signature(String),
}

impl HammurabiErrorCode for CommitError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Repository { .. } => error_code::REPOSITORY_ERROR,
            _ => error_code::COMMIT_FAILED,
        }
    }
}
