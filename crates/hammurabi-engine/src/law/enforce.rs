//! Sequential rule execution with per-rule failure isolation and a single
//! terminal commit.

use std::time::Instant;

use hammurabi_core::errors::{LawError, RuleError};
use hammurabi_core::events::*;
use hammurabi_core::traits::CommitSink;

use super::{EnforcementReport, Law, RuleFailure};
use crate::rule::RuleRef;

/// Result of running one rule, before the abort policy is applied.
enum RuleOutcome {
    Succeeded,
    Failed(RuleError),
}

impl Law {
    /// Run every rule in execution order, then commit if anything changed.
    ///
    /// A failing rule is logged along with its declared prerequisites. Under
    /// `rule_can_abort` the failure is returned as [`LawError::Aborted`] and
    /// neither later rules nor the commit run; otherwise it is recorded in the
    /// report and the pass continues. A commit sink failure is returned as
    /// [`LawError::Commit`].
    pub fn enforce(&self, sink: &dyn CommitSink) -> Result<EnforcementReport, LawError> {
        let span = tracing::info_span!("law_enforce", law = %self.name);
        let _guard = span.enter();

        let order = self.execution_order();
        let mut report = EnforcementReport::new(&self.name);

        self.events.emit_law_started(&LawStartedEvent {
            law: self.name.clone(),
            rule_count: order.len(),
        });
        tracing::info!(rules = order.len(), "enforcing law");

        for (position, rule) in order.iter().enumerate() {
            report.executed.push(rule.name().to_string());
            match self.run_rule(position, rule) {
                RuleOutcome::Succeeded => {}
                RuleOutcome::Failed(error) => {
                    if self.policy.rule_can_abort {
                        self.events.emit_law_aborted(&LawAbortedEvent {
                            law: self.name.clone(),
                            rule: rule.name().to_string(),
                            message: error.to_string(),
                        });
                        return Err(LawError::Aborted {
                            law: self.name.clone(),
                            rule: rule.name().to_string(),
                            source: error,
                        });
                    }
                    report.failures.push(RuleFailure {
                        rule: rule.name().to_string(),
                        message: error.to_string(),
                    });
                }
            }
        }

        self.commit(&order, sink, &mut report)?;

        self.events.emit_law_completed(&LawCompletedEvent {
            law: self.name.clone(),
            executed: report.executed.len(),
            failed: report.failures.len(),
            committed: report.committed(),
        });
        Ok(report)
    }

    fn run_rule(&self, position: usize, rule: &RuleRef) -> RuleOutcome {
        self.events.emit_rule_started(&RuleStartedEvent {
            law: self.name.clone(),
            rule: rule.name().to_string(),
            position,
        });

        let start = Instant::now();
        match rule.execute() {
            Ok(()) => {
                let duration_ms = start.elapsed().as_millis() as u64;
                tracing::debug!(
                    rule = rule.name(),
                    made_changes = rule.made_changes(),
                    rule_execution_time = duration_ms,
                    "rule executed"
                );
                self.events.emit_rule_succeeded(&RuleSucceededEvent {
                    law: self.name.clone(),
                    rule: rule.name().to_string(),
                    made_changes: rule.made_changes(),
                    duration_ms,
                });
                RuleOutcome::Succeeded
            }
            Err(error) => {
                tracing::error!(
                    rule = rule.name(),
                    error = %error,
                    "execution of rule {} failed: {}",
                    rule.name(),
                    error
                );

                let chain = rule.rule_chain();
                for prerequisite in &chain {
                    tracing::warn!(
                        rule = rule.name(),
                        prerequisite = prerequisite.name(),
                        "{} is a prerequisite of failed rule {}",
                        prerequisite.name(),
                        rule.name()
                    );
                }

                self.events.emit_rule_failed(&RuleFailedEvent {
                    law: self.name.clone(),
                    rule: rule.name().to_string(),
                    message: error.to_string(),
                    rule_chain: chain.iter().map(|r| r.name().to_string()).collect(),
                });
                RuleOutcome::Failed(error)
            }
        }
    }

    /// Commit once if any rule in `order` reports changes.
    fn commit(
        &self,
        order: &[RuleRef],
        sink: &dyn CommitSink,
        report: &mut EnforcementReport,
    ) -> Result<(), LawError> {
        report.changed = order
            .iter()
            .filter(|rule| rule.made_changes())
            .map(|rule| rule.name().to_string())
            .collect();

        if report.changed.is_empty() {
            tracing::info!("no rule made changes, nothing to commit");
            return Ok(());
        }

        let message = self.commit_message(report.changed.iter().map(String::as_str));
        sink.commit(&message)?;
        tracing::info!(changed = report.changed.len(), "committed law changes");

        self.events.emit_law_committed(&LawCommittedEvent {
            law: self.name.clone(),
            message: message.clone(),
            changed_rules: report.changed.clone(),
        });
        report.commit_message = Some(message);
        Ok(())
    }
}
