//! Domain types and validators for stackctl configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::path::{Component, Path};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &["stack.compose_file", "privilege.helper"];
pub const VALID_PRIVILEGE_HELPERS: &[&str] = &["sudo", "doas"];

/// Tools that must be on `PATH` before the pipeline mutates anything.
pub const REQUIRED_TOOLS: &[&str] = &["git", "docker"];

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.stackctl/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StackctlConfig {
    /// Managed stack settings.
    #[serde(default)]
    pub stack: StackConfig,
    /// Privilege escalation settings.
    #[serde(default)]
    pub privilege: PrivilegeConfig,
}

/// Managed stack configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackConfig {
    /// Compose descriptor, relative to the execution root.
    #[serde(default = "default_compose_file")]
    pub compose_file: String,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            compose_file: default_compose_file(),
        }
    }
}

/// Privilege configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivilegeConfig {
    /// Escalation helper used when not running as root.
    #[serde(default = "default_helper")]
    pub helper: String,
}

impl Default for PrivilegeConfig {
    fn default() -> Self {
        Self {
            helper: default_helper(),
        }
    }
}

fn default_compose_file() -> String {
    "docker-compose.yml".to_string()
}

fn default_helper() -> String {
    "sudo".to_string()
}

impl StackctlConfig {
    /// Validate and apply `key = value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid for it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        match key {
            "stack.compose_file" => self.stack.compose_file = value.to_string(),
            "privilege.helper" => self.privilege.helper = value.to_string(),
            _ => anyhow::bail!("Unknown setting: {key}"),
        }
        Ok(())
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    match key {
        "privilege.helper" if !VALID_PRIVILEGE_HELPERS.contains(&value) => {
            Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
                valid: VALID_PRIVILEGE_HELPERS.join(", "),
            }
            .into())
        }
        "stack.compose_file" if !is_relative_descriptor(value) => {
            Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
                valid: "a relative path inside the execution root".to_string(),
            }
            .into())
        }
        _ => Ok(()),
    }
}

fn is_relative_descriptor(value: &str) -> bool {
    let path = Path::new(value);
    !value.trim().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

// ── Unit tests ───────────────────────────────────────────────────────────────
