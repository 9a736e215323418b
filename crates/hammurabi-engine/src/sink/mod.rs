//! Commit sink implementations.

pub mod git;

pub use git::GitCommitSink;
