//! Rule execution errors.

use super::error_code::{self, HammurabiErrorCode};

/// Failure signal returned by a rule's `execute`.
///
/// `Display` is the bare failure text with no prefix, so an aborted law
/// surfaces exactly what the rule reported.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("{0}")]
    Failed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl RuleError {
    /// Shorthand for [`RuleError::Failed`].
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

impl HammurabiErrorCode for RuleError {
    fn error_code(&self) -> &'static str {
        error_code::RULE_FAILED
    }
}
