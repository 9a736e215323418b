//! Errors crossing the `Law::enforce` boundary.

use super::error_code::{self, HammurabiErrorCode};
use super::{CommitError, RuleError};

/// The only failures `enforce` reports: an aborting rule or a failed commit.
#[derive(Debug, thiserror::Error)]
pub enum LawError {
    /// A rule failed under the abort policy. Displays as the rule's own error.
    #[error("{source}")]
    Aborted {
        law: String,
        rule: String,
        #[source]
        source: RuleError,
    },

    #[error(transparent)]
    Commit(#[from] CommitError),
}

impl LawError {
    /// The rule error that stopped the law, if this is an abort.
    pub fn rule_error(&self) -> Option<&RuleError> {
        match self {
            Self::Aborted { source, .. } => Some(source),
            Self::Commit(_) => None,
        }
    }
}

impl HammurabiErrorCode for LawError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Aborted { .. } => error_code::LAW_ABORTED,
            Self::Commit(e) => e.error_code(),
        }
    }
}
