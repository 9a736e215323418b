//! Git commit configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the git commit sink.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GitConfig {
    /// Log the commit message instead of committing. Default: false.
    pub dry_run: Option<bool>,
    /// Commit author name. Falls back to the repository's `user.name`.
    pub author_name: Option<String>,
    /// Commit author email. Falls back to the repository's `user.email`.
    pub author_email: Option<String>,
    /// Stage every working-tree change before committing. Default: true.
    pub commit_all: Option<bool>,
}

impl GitConfig {
    /// Returns the effective dry-run flag, defaulting to `false`.
    pub fn effective_dry_run(&self) -> bool {
        self.dry_run.unwrap_or(false)
    }

    /// Returns the effective staging mode, defaulting to `true`.
    pub fn effective_commit_all(&self) -> bool {
        self.commit_all.unwrap_or(true)
    }
}
