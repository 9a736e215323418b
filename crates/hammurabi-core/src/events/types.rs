//! Event payload types for the enforcement lifecycle.

/// Payload for `on_law_started`.
#[derive(Debug, Clone)]
pub struct LawStartedEvent {
    pub law: String,
    pub rule_count: usize,
}

/// Payload for `on_rule_started`.
#[derive(Debug, Clone)]
pub struct RuleStartedEvent {
    pub law: String,
    pub rule: String,
    pub position: usize,
}

/// Payload for `on_rule_succeeded`.
#[derive(Debug, Clone)]
pub struct RuleSucceededEvent {
    pub law: String,
    pub rule: String,
    pub made_changes: bool,
    pub duration_ms: u64,
}

/// Payload for `on_rule_failed`.
#[derive(Debug, Clone)]
pub struct RuleFailedEvent {
    pub law: String,
    pub rule: String,
    pub message: String,
    /// Names of the failing rule's declared prerequisites.
    pub rule_chain: Vec<String>,
}

/// Payload for `on_law_aborted`.
#[derive(Debug, Clone)]
pub struct LawAbortedEvent {
    pub law: String,
    pub rule: String,
    pub message: String,
}

/// Payload for `on_law_committed`.
#[derive(Debug, Clone)]
pub struct LawCommittedEvent {
    pub law: String,
    pub message: String,
    pub changed_rules: Vec<String>,
}

/// Payload for `on_law_completed`.
#[derive(Debug, Clone)]
pub struct LawCompletedEvent {
    pub law: String,
    pub executed: usize,
    pub failed: usize,
    pub committed: bool,
}
