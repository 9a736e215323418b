//! Rule chain resolution: dependency-first flattening with first-occurrence dedup.
//!
//! Cyclic prerequisite declarations are not detected; resolving a cycle
//! recurses without bound.

use std::collections::HashSet;
use std::sync::Arc;

use crate::rule::RuleRef;

/// Flatten `rule` and its declared prerequisites, depth-first.
///
/// Prerequisites come from [`RuleState::prerequisites`](crate::rule::RuleState::prerequisites).
/// One [`ExecutionOrder`] is threaded through the walk and an already
/// scheduled prerequisite is not expanded again, so shared sub-graphs are
/// visited once. The result ends with `rule` itself.
pub fn resolve(rule: RuleRef) -> Vec<RuleRef> {
    let mut order = ExecutionOrder::new();
    resolve_into(rule, &mut order);
    order.into_rules()
}

fn resolve_into(rule: RuleRef, order: &mut ExecutionOrder) {
    for prerequisite in rule.state().prerequisites() {
        if !order.contains(prerequisite) {
            resolve_into(Arc::clone(prerequisite), order);
        }
    }
    order.push(rule);
}

/// Ordered rule sequence where a rule is kept only at its first position.
#[derive(Default)]
pub struct ExecutionOrder {
    rules: Vec<RuleRef>,
    seen: HashSet<usize>,
}

impl ExecutionOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `rule` unless it is already scheduled. Returns whether it was added.
    pub fn push(&mut self, rule: RuleRef) -> bool {
        if self.seen.insert(identity(&rule)) {
            self.rules.push(rule);
            true
        } else {
            false
        }
    }

    /// Append every rule in order, skipping the ones already scheduled.
    pub fn extend(&mut self, rules: impl IntoIterator<Item = RuleRef>) {
        for rule in rules {
            self.push(rule);
        }
    }

    pub fn contains(&self, rule: &RuleRef) -> bool {
        self.seen.contains(&identity(rule))
    }

    pub fn into_rules(self) -> Vec<RuleRef> {
        self.rules
    }
}

/// Allocation address of the rule, ignoring the vtable half of the fat pointer.
fn identity(rule: &RuleRef) -> usize {
    Arc::as_ptr(rule) as *const () as usize
}
