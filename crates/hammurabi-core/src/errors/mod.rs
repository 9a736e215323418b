//! Error handling for Hammurabi.
//! One error enum per subsystem, `thiserror` only.

pub mod commit_error;
pub mod config_error;
pub mod error_code;
pub mod law_error;
pub mod rule_error;

pub use commit_error::CommitError;
pub use config_error::ConfigError;
pub use error_code::HammurabiErrorCode;
pub use law_error::LawError;
pub use rule_error::RuleError;
