//! Service configuration.
//!
//! Loaded from environment variables with defaults from [`constants`].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Result, VeriguardError, constants};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON structured logs (for production).
    Json,
    /// Human-readable logs (for development).
    #[default]
    Pretty,
}

/// Deployment configuration for one VeriGuard process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Block duplicates even within the same marketplace, not just across
    /// marketplaces. Fixed for the life of the process.
    pub block_within_marketplace: bool,
    /// Directory holding the persisted ledger.
    pub data_dir: PathBuf,
    pub log_format: LogFormat,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            block_within_marketplace: constants::DEFAULT_BLOCK_WITHIN_MARKETPLACE,
            data_dir: PathBuf::from(constants::DEFAULT_DATA_DIR),
            log_format: LogFormat::default(),
        }
    }
}

impl ServiceConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(constants::ENV_BLOCK_WITHIN_MARKETPLACE) {
            cfg.block_within_marketplace = parse_bool(&raw).ok_or_else(|| {
                VeriguardError::Configuration(format!(
                    "{} must be true or false, got {raw:?}",
                    constants::ENV_BLOCK_WITHIN_MARKETPLACE
                ))
            })?;
        }

        if let Some(dir) = lookup(constants::ENV_DATA_DIR) {
            let dir = dir.trim();
            if !dir.is_empty() {
                cfg.data_dir = PathBuf::from(dir);
            }
        }

        if let Some(raw) = lookup(constants::ENV_LOG_FORMAT) {
            cfg.log_format = match raw.trim().to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" | "" => LogFormat::Pretty,
                other => {
                    return Err(VeriguardError::Configuration(format!(
                        "{} must be json or pretty, got {other:?}",
                        constants::ENV_LOG_FORMAT
                    )));
                }
            };
        }

        Ok(cfg)
    }

    /// Full path of the persisted ledger file.
    #[must_use]
    pub fn ledger_path(&self) -> PathBuf {
        self.data_dir.join(constants::LEDGER_FILE_NAME)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
