//! EventDispatcher: synchronous fan-out to registered handlers.

use std::sync::Arc;

use super::handler::EnforcementEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// With no handlers registered, every `emit_*` is a loop over an empty Vec.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EnforcementEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn EnforcementEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler does not stop later handlers from receiving the event.
    fn emit<F: Fn(&dyn EnforcementEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("enforcement event handler panicked");
            }
        }
    }

    pub fn emit_law_started(&self, event: &LawStartedEvent) {
        self.emit(|h| h.on_law_started(event));
    }

    pub fn emit_rule_started(&self, event: &RuleStartedEvent) {
        self.emit(|h| h.on_rule_started(event));
    }

    pub fn emit_rule_succeeded(&self, event: &RuleSucceededEvent) {
        self.emit(|h| h.on_rule_succeeded(event));
    }

    pub fn emit_rule_failed(&self, event: &RuleFailedEvent) {
        self.emit(|h| h.on_rule_failed(event));
    }

    pub fn emit_law_aborted(&self, event: &LawAbortedEvent) {
        self.emit(|h| h.on_law_aborted(event));
    }

    pub fn emit_law_committed(&self, event: &LawCommittedEvent) {
        self.emit(|h| h.on_law_committed(event));
    }

    pub fn emit_law_completed(&self, event: &LawCompletedEvent) {
        self.emit(|h| h.on_law_completed(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
