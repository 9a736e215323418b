//! Enforcement configuration.

use serde::{Deserialize, Serialize};

use super::HammurabiConfig;

/// Configuration for the rule execution engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EnforcementConfig {
    /// Whether a failing rule aborts the whole law. Default: false.
    pub rule_can_abort: Option<bool>,
}

impl EnforcementConfig {
    /// Returns the effective abort policy, defaulting to `false`.
    pub fn effective_rule_can_abort(&self) -> bool {
        self.rule_can_abort.unwrap_or(false)
    }
}

/// Resolved policy handed to a law. Plain values only, no optional layering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnforcementPolicy {
    /// Re-raise the first rule failure instead of continuing with the next rule.
    pub rule_can_abort: bool,
}

impl EnforcementPolicy {
    /// Policy that stops at the first failing rule.
    pub fn abort_on_failure() -> Self {
        Self {
            rule_can_abort: true,
        }
    }

    /// Policy that logs failures and keeps going.
    pub fn continue_on_failure() -> Self {
        Self {
            rule_can_abort: false,
        }
    }
}

impl From<&HammurabiConfig> for EnforcementPolicy {
    fn from(config: &HammurabiConfig) -> Self {
        Self {
            rule_can_abort: config.enforcement.effective_rule_can_abort(),
        }
    }
}
