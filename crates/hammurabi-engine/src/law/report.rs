//! Outcome of one completed enforcement pass.

use serde::Serialize;

/// A rule that failed while the law kept going.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleFailure {
    pub rule: String,
    pub message: String,
}

/// What a non-aborted `Law::enforce` call did.
/// Failures absorbed under the continue policy are collected here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnforcementReport {
    pub law: String,
    /// Rule names in the order they ran.
    pub executed: Vec<String>,
    /// Rules whose change flag was set after the pass.
    pub changed: Vec<String>,
    pub failures: Vec<RuleFailure>,
    /// Message handed to the commit sink, if a commit happened.
    pub commit_message: Option<String>,
}

impl EnforcementReport {
    pub fn new(law: impl Into<String>) -> Self {
        Self {
            law: law.into(),
            ..Self::default()
        }
    }

    /// Returns true if no rule failed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn committed(&self) -> bool {
        self.commit_message.is_some()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
