//! Path management for hearth-ledger
//!
//! ## Path Resolution Order
//!
//! 1. `HEARTH_LEDGER_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/hearth-ledger` or `~/.config/hearth-ledger`
//! 3. Windows: `%APPDATA%\hearth-ledger`

use std::path::{Path, PathBuf};

use crate::error::LedgerError;

/// Environment variable overriding the base directory
pub const BASE_DIR_ENV: &str = "HEARTH_LEDGER_DIR";

/// Manages all paths used by hearth-ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = match std::env::var_os(BASE_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use a specific base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding household data (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default household snapshot (`<base>/data/household.json`)
    pub fn household_file(&self) -> PathBuf {
        self.data_dir().join("household.json")
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    let config_base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) => PathBuf::from(xdg),
        None => {
            let home = std::env::var_os("HOME").ok_or_else(|| {
                LedgerError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("hearth-ledger"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    let appdata = std::env::var_os("APPDATA")
        .ok_or_else(|| LedgerError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("hearth-ledger"))
}
