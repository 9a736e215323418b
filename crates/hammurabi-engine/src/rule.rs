//! Rule contract: identity, change flag, prerequisites, and execution.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use hammurabi_core::errors::RuleError;

use crate::resolver;

/// Shared handle to a rule. Identity for deduplication is the allocation,
/// so the same rule reached through two paths is scheduled once.
pub type RuleRef = Arc<dyn Rule>;

/// Upcast from a concrete rule handle to [`RuleRef`]. Implemented for every rule.
pub trait AsRuleRef {
    fn as_rule_ref(self: Arc<Self>) -> RuleRef;
}

impl<T: Rule + 'static> AsRuleRef for T {
    fn as_rule_ref(self: Arc<Self>) -> RuleRef {
        self
    }
}

/// An atomic unit of policy.
///
/// Implementors provide their [`RuleState`] and [`execute`](Rule::execute);
/// everything else has a default driven by that state.
pub trait Rule: AsRuleRef + Send + Sync {
    /// Identity, declared prerequisites, and the change flag.
    fn state(&self) -> &RuleState;

    /// Apply the rule to the repository.
    ///
    /// Sets the change flag through [`RuleState::set_made_changes`] when the
    /// working tree was modified. On failure the flag should be left unset.
    fn execute(&self) -> Result<(), RuleError>;

    fn name(&self) -> &str {
        self.state().name()
    }

    fn description(&self) -> &str {
        self.state().description()
    }

    /// Whether the last `execute` changed repository state.
    fn made_changes(&self) -> bool {
        self.state().made_changes()
    }

    /// Declared prerequisites, in declaration order, excluding this rule.
    ///
    /// Only reported when this rule fails. Scheduling reads
    /// [`RuleState::prerequisites`], so prerequisites are declared through
    /// [`RuleState::with_prerequisite`]; an override here changes the failure
    /// report, not what runs.
    fn rule_chain(&self) -> Vec<RuleRef> {
        self.state().prerequisites().to_vec()
    }

    /// Dependency-first flattening of this rule and everything it requires.
    /// This rule is always the last element.
    fn execution_order(self: Arc<Self>) -> Vec<RuleRef> {
        resolver::resolve(self.as_rule_ref())
    }
}

/// State every rule carries. The change flag is atomic so rules can be shared
/// between laws through `Arc` and still flip it from `&self`.
pub struct RuleState {
    name: String,
    description: String,
    prerequisites: Vec<RuleRef>,
    made_changes: AtomicBool,
}

impl RuleState {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            prerequisites: Vec::new(),
            made_changes: AtomicBool::new(false),
        }
    }

    /// Declare a rule that must run before this one.
    pub fn with_prerequisite(mut self, rule: RuleRef) -> Self {
        self.prerequisites.push(rule);
        self
    }

    /// Declare several prerequisites, keeping their order.
    pub fn with_prerequisites(mut self, rules: impl IntoIterator<Item = RuleRef>) -> Self {
        self.prerequisites.extend(rules);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn prerequisites(&self) -> &[RuleRef] {
        &self.prerequisites
    }

    pub fn made_changes(&self) -> bool {
        self.made_changes.load(Ordering::Relaxed)
    }

    pub fn set_made_changes(&self, changed: bool) {
        self.made_changes.store(changed, Ordering::Relaxed);
    }
}

impl fmt::Debug for RuleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prerequisites: Vec<&str> = self.prerequisites.iter().map(|r| r.name()).collect();
        f.debug_struct("RuleState")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("prerequisites", &prerequisites)
            .field("made_changes", &self.made_changes())
            .finish()
    }
}

impl fmt::Debug for dyn Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.state(), f)
    }
}

type RuleAction<P> = dyn Fn(&P) -> Result<bool, RuleError> + Send + Sync;

/// A rule built from a parameter and a closure.
///
/// The closure receives the parameter and returns whether it changed anything.
/// The change flag is cleared before every run, so a failed run reports no
/// changes.
pub struct FnRule<P> {
    state: RuleState,
    param: P,
    action: Box<RuleAction<P>>,
}

impl<P: Send + Sync + 'static> FnRule<P> {
    pub fn new<F>(state: RuleState, param: P, action: F) -> Self
    where
        F: Fn(&P) -> Result<bool, RuleError> + Send + Sync + 'static,
    {
        Self {
            state,
            param,
            action: Box::new(action),
        }
    }

    /// Build and wrap in a [`RuleRef`] in one step.
    pub fn shared<F>(state: RuleState, param: P, action: F) -> RuleRef
    where
        F: Fn(&P) -> Result<bool, RuleError> + Send + Sync + 'static,
    {
        Arc::new(Self::new(state, param, action))
    }

    pub fn param(&self) -> &P {
        &self.param
    }
}

impl<P: Send + Sync + 'static> Rule for FnRule<P> {
    fn state(&self) -> &RuleState {
        &self.state
    }

    fn execute(&self) -> Result<(), RuleError> {
        self.state.set_made_changes(false);
        let changed = (self.action)(&self.param)?;
        self.state.set_made_changes(changed);
        Ok(())
    }
}
