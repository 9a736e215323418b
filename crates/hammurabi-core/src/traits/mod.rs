//! Traits at the engine's external seams.

pub mod commit_sink;

pub use commit_sink::CommitSink;
