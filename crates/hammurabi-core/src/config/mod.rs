//! Configuration system for Hammurabi.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod enforcement_config;
pub mod git_config;
pub mod hammurabi_config;

pub use enforcement_config::{EnforcementConfig, EnforcementPolicy};
pub use git_config::GitConfig;
pub use hammurabi_config::{CliOverrides, HammurabiConfig};
