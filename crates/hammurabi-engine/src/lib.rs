//! hammurabi-engine: the rule execution engine.
//!
//! - Rule: the trait every policy unit implements, plus `FnRule`
//! - Resolver: dependency-first flattening of rule prerequisites
//! - Law: execution order, sequential enforcement, abort/continue policy, commit
//! - Pillar: registry of laws sharing one commit sink
//! - Sink: `GitCommitSink`, the libgit2-backed commit sink

pub mod law;
pub mod pillar;
pub mod resolver;
pub mod rule;
pub mod sink;

pub use law::{EnforcementReport, Law, RuleFailure};
pub use pillar::Pillar;
pub use rule::{FnRule, Rule, RuleRef, RuleState};
pub use sink::GitCommitSink;
