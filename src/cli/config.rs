//! CLI commands for settings
//!
//! `config` with no action prints the resolved paths and settings; `set` and
//! `reset` write `config.json`.

use clap::{builder::RangedU64ValueParser, Subcommand};
use std::path::Path;
use tracing::info;

use crate::analytics::SplitPolicy;
use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerResult;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show configuration and paths
    Show,

    /// Change one or more settings
    Set {
        /// Currency symbol printed before amounts
        #[arg(long)]
        currency: Option<String>,

        /// Default split policy for balances
        #[arg(long, value_enum)]
        split: Option<SplitPolicy>,

        /// Default number of months in `report trend`
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..=1200))]
        trend_months: Option<usize>,

        /// Default log filter level (trace, debug, info, warn, error)
        #[arg(long)]
        log_level: Option<String>,
    },

    /// Restore default settings
    Reset,
}

/// Handle config commands
pub fn handle_config_command(
    paths: &LedgerPaths,
    settings: &Settings,
    data_file: &Path,
    cmd: ConfigCommands,
) -> LedgerResult<()> {
    match cmd {
        ConfigCommands::Show => {
            print!("{}", format_settings(paths, settings, data_file));
        }
        ConfigCommands::Set {
            currency,
            split,
            trend_months,
            log_level,
        } => {
            let mut updated = settings.clone();
            if let Some(currency) = currency {
                updated.currency_symbol = currency;
            }
            if let Some(split) = split {
                updated.split_policy = split;
            }
            if let Some(months) = trend_months {
                updated.trend_months = months;
            }
            if let Some(level) = log_level {
                updated.log_level = level;
            }

            updated.save(paths)?;
            info!(path = %paths.settings_file().display(), "saved settings");
            println!("Settings saved to {}", paths.settings_file().display());
        }
        ConfigCommands::Reset => {
            Settings::default().save(paths)?;
            info!(path = %paths.settings_file().display(), "reset settings");
            println!("Settings reset to defaults.");
        }
    }
    Ok(())
}

/// Paths and settings, one per line
pub fn format_settings(paths: &LedgerPaths, settings: &Settings, data_file: &Path) -> String {
    let mut output = String::new();
    output.push_str("hearth-ledger configuration\n");
    output.push_str("===========================\n");
    output.push_str(&format!("Config directory: {}\n", paths.base_dir().display()));
    output.push_str(&format!("Settings file:    {}\n", paths.settings_file().display()));
    output.push_str(&format!("Household data:   {}\n", data_file.display()));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Currency symbol: {}\n", settings.currency_symbol));
    output.push_str(&format!("  Split policy:    {}\n", settings.split_policy));
    output.push_str(&format!("  Trend months:    {}\n", settings.trend_months));
    output.push_str(&format!("  Log level:       {}\n", settings.log_level));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_writes_only_given_fields() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();

        handle_config_command(
            &paths,
            &settings,
            &paths.household_file(),
            ConfigCommands::Set {
                currency: Some("€".into()),
                split: Some(SplitPolicy::LargestRemainder),
                trend_months: None,
                log_level: None,
            },
        )
        .unwrap();

        let saved = Settings::load_or_create(&paths).unwrap();
        assert_eq!(saved.currency_symbol, "€");
        assert_eq!(saved.split_policy, SplitPolicy::LargestRemainder);
        assert_eq!(saved.trend_months, 6);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let custom = Settings {
            trend_months: 12,
            ..Settings::default()
        };
        custom.save(&paths).unwrap();

        handle_config_command(&paths, &custom, &paths.household_file(), ConfigCommands::Reset)
            .unwrap();

        assert_eq!(Settings::load_or_create(&paths).unwrap(), Settings::default());
    }

    #[test]
    fn test_format_settings() {
        let paths = LedgerPaths::with_base_dir("/tmp/ledger".into());
        let text = format_settings(&paths, &Settings::default(), &paths.household_file());

        assert!(text.contains("Split policy:    rounded-equal"));
        assert!(text.contains("Trend months:    6"));
        assert!(text.contains("household.json"));
    }
}
