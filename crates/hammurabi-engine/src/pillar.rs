//! Pillar — registry of laws enforced one after another against one sink.

use hammurabi_core::config::EnforcementPolicy;
use hammurabi_core::errors::LawError;
use hammurabi_core::traits::CommitSink;

use crate::law::{EnforcementReport, Law};

/// Holds laws in registration order and enforces them with a shared commit sink.
///
/// Each law commits its own changes, so a run produces at most one commit per law.
pub struct Pillar<S: CommitSink> {
    sink: S,
    laws: Vec<Law>,
    policy: Option<EnforcementPolicy>,
}

impl<S: CommitSink> Pillar<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            laws: Vec::new(),
            policy: None,
        }
    }

    /// Apply `policy` to every law registered from now on.
    pub fn with_policy(mut self, policy: EnforcementPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn register(&mut self, mut law: Law) {
        if let Some(policy) = self.policy {
            law.set_policy(policy);
        }
        tracing::debug!(law = %law.name, "registered law");
        self.laws.push(law);
    }

    pub fn laws(&self) -> &[Law] {
        &self.laws
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Enforce every law in registration order.
    ///
    /// Stops at the first law that aborts or fails to commit; laws before it
    /// have already committed.
    pub fn enforce(&self) -> Result<Vec<EnforcementReport>, LawError> {
        let mut reports = Vec::with_capacity(self.laws.len());
        for law in &self.laws {
            match law.enforce(&self.sink) {
                Ok(report) => reports.push(report),
                Err(err) => {
                    tracing::error!(law = %law.name, error = %err, "law enforcement stopped");
                    return Err(err);
                }
            }
        }
        Ok(reports)
    }
}
