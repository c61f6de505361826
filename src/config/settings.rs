//! User settings for hearth-ledger
//!
//! Display and analytics preferences: currency symbol, how fair shares are
//! split, default trend length and log level.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::analytics::SplitPolicy;
use crate::error::LedgerError;
use crate::storage::{read_json, write_json_atomic};

/// User settings for hearth-ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// How the household total is divided into fair shares
    #[serde(default)]
    pub split_policy: SplitPolicy,

    /// Number of months shown by `report trend` when not given
    #[serde(default = "default_trend_months")]
    pub trend_months: usize,

    /// Default tracing filter level (overridden by `RUST_LOG`)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_trend_months() -> usize {
    6
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            split_policy: SplitPolicy::default(),
            trend_months: default_trend_months(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        read_json(paths.settings_file()).map_err(|e| {
            LedgerError::Config(format!("Failed to load settings: {}", e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        write_json_atomic(paths.settings_file(), self)
    }
}
