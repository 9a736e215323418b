//! Law — an ordered set of rules, their execution order, and enforcement.

pub mod enforce;
pub mod report;

use std::sync::Arc;

use hammurabi_core::config::EnforcementPolicy;
use hammurabi_core::events::{EnforcementEventHandler, EventDispatcher};

use crate::resolver::ExecutionOrder;
use crate::rule::RuleRef;

pub use report::{EnforcementReport, RuleFailure};

/// Top-level policy unit.
///
/// `name` and `description` are public and may change after construction;
/// [`documentation`](Law::documentation) always reflects the current values.
/// The rule collection is fixed once the law is built.
#[derive(Debug)]
pub struct Law {
    pub name: String,
    pub description: String,
    rules: Vec<RuleRef>,
    policy: EnforcementPolicy,
    events: EventDispatcher,
}

impl Law {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        rules: impl IntoIterator<Item = RuleRef>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            rules: rules.into_iter().collect(),
            policy: EnforcementPolicy::default(),
            events: EventDispatcher::new(),
        }
    }

    /// Set the failure policy used by [`enforce`](Law::enforce).
    pub fn with_policy(mut self, policy: EnforcementPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Register an observer for this law's enforcement events.
    pub fn with_event_handler(mut self, handler: Arc<dyn EnforcementEventHandler>) -> Self {
        self.events.register(handler);
        self
    }

    pub fn set_policy(&mut self, policy: EnforcementPolicy) {
        self.policy = policy;
    }

    pub fn policy(&self) -> EnforcementPolicy {
        self.policy
    }

    /// Top-level rules in declaration order.
    pub fn rules(&self) -> &[RuleRef] {
        &self.rules
    }

    /// `"{name}\n{description}"`, used as the commit message header.
    pub fn documentation(&self) -> String {
        format!("{}\n{}", self.name, self.description)
    }

    /// Every rule reachable from this law, prerequisites first.
    ///
    /// Concatenates each top-level rule's own execution order in declaration
    /// order, keeping a rule only where it first appears.
    pub fn execution_order(&self) -> Vec<RuleRef> {
        let mut order = ExecutionOrder::new();
        for rule in &self.rules {
            order.extend(Arc::clone(rule).execution_order());
        }
        order.into_rules()
    }

    /// Commit message for the given changed rule names: the documentation,
    /// a blank line, then one `* name` line per rule.
    pub fn commit_message<'a>(&self, changed: impl IntoIterator<Item = &'a str>) -> String {
        let bullets: Vec<String> = changed.into_iter().map(|name| format!("* {name}")).collect();
        format!("{}\n\n{}", self.documentation(), bullets.join("\n"))
    }
}
