//! Stable error codes for drivers that report failures outside Rust.

/// Maps an error to a stable, machine-readable code.
pub trait HammurabiErrorCode {
    /// Returns the error code string (e.g., "RULE_FAILED").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const RULE_FAILED: &str = "RULE_FAILED";
pub const LAW_ABORTED: &str = "LAW_ABORTED";
pub const COMMIT_FAILED: &str = "COMMIT_FAILED";
pub const REPOSITORY_ERROR: &str = "REPOSITORY_ERROR";
