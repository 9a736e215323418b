//! Tests for the Hammurabi configuration system.

use std::sync::Mutex;

use hammurabi_core::config::{CliOverrides, EnforcementPolicy, HammurabiConfig};
use hammurabi_core::errors::{ConfigError, HammurabiErrorCode};

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ENV_KEYS: [&str; 5] = [
    "HAMMURABI_RULE_CAN_ABORT",
    "HAMMURABI_GIT_DRY_RUN",
    "HAMMURABI_GIT_COMMIT_ALL",
    "HAMMURABI_GIT_AUTHOR_NAME",
    "HAMMURABI_GIT_AUTHOR_EMAIL",
];

fn clear_env() {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
}

/// Points the user config lookup at an empty directory.
fn isolate_home(dir: &tempfile::TempDir) {
    std::env::set_var("HOME", dir.path());
}

#[test]
fn test_defaults() {
    let config = HammurabiConfig::default();
    assert!(!config.enforcement.effective_rule_can_abort());
    assert!(!config.git.effective_dry_run());
    assert!(config.git.effective_commit_all());
    assert_eq!(EnforcementPolicy::from(&config), EnforcementPolicy::continue_on_failure());
}

#[test]
fn test_from_toml() {
    let config = HammurabiConfig::from_toml(
        r#"
[enforcement]
rule_can_abort = true

[git]
dry_run = true
"#,
    )
    .unwrap();

    assert_eq!(config.enforcement.rule_can_abort, Some(true));
    assert_eq!(config.git.dry_run, Some(true));
    assert!(EnforcementPolicy::from(&config).rule_can_abort);
}

#[test]
fn test_from_toml_rejects_invalid_syntax() {
    let err = HammurabiConfig::from_toml("[enforcement\nrule_can_abort = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = HammurabiConfig::from_toml("[future]\nflag = 1\n").unwrap();
    assert!(config.enforcement.rule_can_abort.is_none());
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();

    let home = tempfile::TempDir::new().unwrap();
    isolate_home(&home);
    std::fs::create_dir_all(home.path().join(".hammurabi")).unwrap();
    std::fs::write(
        home.path().join(".hammurabi").join("config.toml"),
        "[git]\ncommit_all = false\ndry_run = true\n",
    )
    .unwrap();

    let project = tempfile::TempDir::new().unwrap();
    std::fs::write(
        project.path().join("hammurabi.toml"),
        "[enforcement]\nrule_can_abort = false\n[git]\ndry_run = false\n",
    )
    .unwrap();

    std::env::set_var("HAMMURABI_RULE_CAN_ABORT", "true");
    let cli = CliOverrides {
        dry_run: Some(true),
        ..Default::default()
    };

    let config = HammurabiConfig::load(project.path(), Some(&cli)).unwrap();

    // User layer survives where nothing overrides it.
    assert_eq!(config.git.commit_all, Some(false));
    // Env beats project.
    assert_eq!(config.enforcement.rule_can_abort, Some(true));
    // CLI beats project, which beat user.
    assert_eq!(config.git.dry_run, Some(true));

    clear_env();
}

#[test]
fn test_load_without_files_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();

    let home = tempfile::TempDir::new().unwrap();
    isolate_home(&home);
    let project = tempfile::TempDir::new().unwrap();

    let config = HammurabiConfig::load(project.path(), None).unwrap();
    assert!(config.enforcement.rule_can_abort.is_none());
    assert!(config.git.dry_run.is_none());
}

#[test]
fn test_invalid_env_bool_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();

    let home = tempfile::TempDir::new().unwrap();
    isolate_home(&home);
    let project = tempfile::TempDir::new().unwrap();
    std::env::set_var("HAMMURABI_GIT_DRY_RUN", "sometimes");

    let err = HammurabiConfig::load(project.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "HAMMURABI_GIT_DRY_RUN"));

    clear_env();
}

#[test]
fn test_invalid_project_toml_is_fatal() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();

    let home = tempfile::TempDir::new().unwrap();
    isolate_home(&home);
    let project = tempfile::TempDir::new().unwrap();
    std::fs::write(project.path().join("hammurabi.toml"), "not = [valid").unwrap();

    let err = HammurabiConfig::load(project.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_validation_requires_author_pair() {
    let config = HammurabiConfig::from_toml("[git]\nauthor_name = \"Bot\"\n").unwrap();
    let err = HammurabiConfig::validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "git"));
}

#[test]
fn test_validation_rejects_bad_email() {
    let config =
        HammurabiConfig::from_toml("[git]\nauthor_name = \"Bot\"\nauthor_email = \"bot\"\n")
            .unwrap();
    let err = HammurabiConfig::validate(&config).unwrap_err();
    assert!(
        matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "git.author_email")
    );
}

#[test]
fn test_toml_round_trip_keeps_values() {
    let config = HammurabiConfig::from_toml("[enforcement]\nrule_can_abort = true\n").unwrap();
    let rendered = config.to_toml().unwrap();
    let reparsed = HammurabiConfig::from_toml(&rendered).unwrap();
    assert_eq!(reparsed.enforcement.rule_can_abort, Some(true));
}
