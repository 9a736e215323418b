//! Shared fixtures for engine integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use hammurabi_core::errors::{CommitError, RuleError};
use hammurabi_core::traits::CommitSink;
use hammurabi_engine::resolver;
use hammurabi_engine::{Rule, RuleRef, RuleState};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Rule that counts every call the engine makes on it.
///
/// `param` doubles as the failure message when the rule is set to fail.
pub struct TestRule {
    state: RuleState,
    pub param: String,
    fail: bool,
    changes: bool,
    pub executions: AtomicUsize,
    pub chain_queries: AtomicUsize,
    pub order_queries: AtomicUsize,
}

impl TestRule {
    pub fn passing(name: &str) -> Self {
        Self::build(RuleState::new(name, "passing rule"), name, false, false)
    }

    pub fn failing(name: &str, message: &str) -> Self {
        Self::build(RuleState::new(name, "failing rule"), message, true, false)
    }

    fn build(state: RuleState, param: &str, fail: bool, changes: bool) -> Self {
        Self {
            state,
            param: param.to_string(),
            fail,
            changes,
            executions: AtomicUsize::new(0),
            chain_queries: AtomicUsize::new(0),
            order_queries: AtomicUsize::new(0),
        }
    }

    /// Make a successful run report changes.
    pub fn changing(mut self) -> Self {
        self.changes = true;
        self
    }

    pub fn with_prerequisite(mut self, rule: RuleRef) -> Self {
        self.state = self.state.with_prerequisite(rule);
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn executions(&self) -> usize {
        self.executions.load(Ordering::SeqCst)
    }

    pub fn chain_queries(&self) -> usize {
        self.chain_queries.load(Ordering::SeqCst)
    }

    pub fn order_queries(&self) -> usize {
        self.order_queries.load(Ordering::SeqCst)
    }
}

impl Rule for TestRule {
    fn state(&self) -> &RuleState {
        &self.state
    }

    fn execute(&self) -> Result<(), RuleError> {
        self.executions.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(RuleError::failed(self.param.clone()));
        }
        self.state.set_made_changes(self.changes);
        Ok(())
    }

    fn rule_chain(&self) -> Vec<RuleRef> {
        self.chain_queries.fetch_add(1, Ordering::SeqCst);
        self.state.prerequisites().to_vec()
    }

    fn execution_order(self: Arc<Self>) -> Vec<RuleRef> {
        self.order_queries.fetch_add(1, Ordering::SeqCst);
        resolver::resolve(self)
    }
}

pub fn as_ref(rule: &Arc<TestRule>) -> RuleRef {
    Arc::clone(rule) as RuleRef
}

/// Commit sink that records messages instead of touching git.
#[derive(Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn commit_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl CommitSink for RecordingSink {
    fn commit(&self, message: &str) -> Result<(), CommitError> {
        self.messages.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

/// Commit sink that always fails.
pub struct FailingSink;

impl CommitSink for FailingSink {
    fn commit(&self, _message: &str) -> Result<(), CommitError> {
        Err(CommitError::Commit("disk full".to_string()))
    }
}

/// Tracing layer counting error and warning events.
#[derive(Clone, Default)]
pub struct LevelCounter {
    errors: Arc<AtomicUsize>,
    warnings: Arc<AtomicUsize>,
}

impl LevelCounter {
    pub fn errors(&self) -> usize {
        self.errors.load(Ordering::SeqCst)
    }

    pub fn warnings(&self) -> usize {
        self.warnings.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for LevelCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        match *event.metadata().level() {
            Level::ERROR => {
                self.errors.fetch_add(1, Ordering::SeqCst);
            }
            Level::WARN => {
                self.warnings.fetch_add(1, Ordering::SeqCst);
            }
            _ => {}
        }
    }
}

/// Run `f` with `counter` installed as the thread's subscriber.
pub fn with_log_counter<T>(counter: &LevelCounter, f: impl FnOnce() -> T) -> T {
    use tracing_subscriber::prelude::*;

    let subscriber = tracing_subscriber::registry().with(counter.clone());
    tracing::subscriber::with_default(subscriber, f)
}
