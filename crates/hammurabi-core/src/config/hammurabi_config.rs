//! Top-level Hammurabi configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{EnforcementConfig, GitConfig};
use crate::errors::ConfigError;

/// Project-level config file name, looked up in the repository root.
pub const PROJECT_CONFIG_FILE: &str = "hammurabi.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`HAMMURABI_*`)
/// 3. Project config (`hammurabi.toml` in the repository root)
/// 4. User config (`~/.hammurabi/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HammurabiConfig {
    pub enforcement: EnforcementConfig,
    pub git: GitConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub rule_can_abort: Option<bool>,
    pub dry_run: Option<bool>,
}

impl HammurabiConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %err,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &HammurabiConfig) -> Result<(), ConfigError> {
        if let Some(ref name) = config.git.author_name {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "git.author_name".to_string(),
                    message: "must not be blank".to_string(),
                });
            }
        }
        if let Some(ref email) = config.git.author_email {
            if !email.contains('@') {
                return Err(ConfigError::ValidationFailed {
                    field: "git.author_email".to_string(),
                    message: "must be an email address".to_string(),
                });
            }
        }
        if config.git.author_name.is_some() != config.git.author_email.is_some() {
            return Err(ConfigError::ValidationFailed {
                field: "git".to_string(),
                message: "author_name and author_email must be set together".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.hammurabi/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".hammurabi").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut HammurabiConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: HammurabiConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut HammurabiConfig, other: &HammurabiConfig) {
        if other.enforcement.rule_can_abort.is_some() {
            base.enforcement.rule_can_abort = other.enforcement.rule_can_abort;
        }

        if other.git.dry_run.is_some() {
            base.git.dry_run = other.git.dry_run;
        }
        if other.git.author_name.is_some() {
            base.git.author_name = other.git.author_name.clone();
        }
        if other.git.author_email.is_some() {
            base.git.author_email = other.git.author_email.clone();
        }
        if other.git.commit_all.is_some() {
            base.git.commit_all = other.git.commit_all;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `HAMMURABI_RULE_CAN_ABORT`, `HAMMURABI_GIT_DRY_RUN`, etc.
    fn apply_env_overrides(config: &mut HammurabiConfig) -> Result<(), ConfigError> {
        if let Some(v) = env_bool("HAMMURABI_RULE_CAN_ABORT")? {
            config.enforcement.rule_can_abort = Some(v);
        }
        if let Some(v) = env_bool("HAMMURABI_GIT_DRY_RUN")? {
            config.git.dry_run = Some(v);
        }
        if let Some(v) = env_bool("HAMMURABI_GIT_COMMIT_ALL")? {
            config.git.commit_all = Some(v);
        }
        if let Ok(val) = std::env::var("HAMMURABI_GIT_AUTHOR_NAME") {
            config.git.author_name = Some(val);
        }
        if let Ok(val) = std::env::var("HAMMURABI_GIT_AUTHOR_EMAIL") {
            config.git.author_email = Some(val);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut HammurabiConfig, cli: &CliOverrides) {
        if let Some(v) = cli.rule_can_abort {
            config.enforcement.rule_can_abort = Some(v);
        }
        if let Some(v) = cli.dry_run {
            config.git.dry_run = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Reads a boolean env var. Accepts `true/false/1/0/yes/no`, case-insensitive.
fn env_bool(key: &str) -> Result<Option<bool>, ConfigError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(Some(true)),
        "false" | "0" | "no" => Ok(Some(false)),
        _ => Err(ConfigError::InvalidValue {
            field: key.to_string(),
            message: format!("expected a boolean, got {raw:?}"),
        }),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
