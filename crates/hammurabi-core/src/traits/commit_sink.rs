//! Commit sink contract.

use crate::errors::CommitError;

/// Persists all working-tree changes produced by a law's rules as one unit.
///
/// Invoked at most once per enforcement pass, after every rule has settled.
pub trait CommitSink: Send + Sync {
    /// Stage and commit pending changes with `message`.
    fn commit(&self, message: &str) -> Result<(), CommitError>;
}
