//! hammurabi-core: shared foundation for the Hammurabi rule engine.
//!
//! - Config: TOML-based layered configuration (`HammurabiConfig`)
//! - Errors: one `thiserror` enum per subsystem plus stable error codes
//! - Events: enforcement lifecycle hooks with synchronous dispatch
//! - Tracing: subscriber setup and structured field names
//! - Traits: the commit sink contract consumed by the engine

pub mod config;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;

pub use config::{EnforcementPolicy, HammurabiConfig};
pub use errors::{CommitError, ConfigError, HammurabiErrorCode, LawError, RuleError};
pub use traits::CommitSink;
