//! EnforcementEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing law enforcement.
///
/// Handlers only override the events they care about.
pub trait EnforcementEventHandler: Send + Sync {
    fn on_law_started(&self, _event: &LawStartedEvent) {}
    fn on_rule_started(&self, _event: &RuleStartedEvent) {}
    fn on_rule_succeeded(&self, _event: &RuleSucceededEvent) {}
    fn on_rule_failed(&self, _event: &RuleFailedEvent) {}
    fn on_law_aborted(&self, _event: &LawAbortedEvent) {}
    fn on_law_committed(&self, _event: &LawCommittedEvent) {}
    fn on_law_completed(&self, _event: &LawCompletedEvent) {}
}
