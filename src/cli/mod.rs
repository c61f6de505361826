//! CLI command handlers
//!
//! Bridges the clap argument parsing with the storage boundary and the
//! analytics engine.

pub mod config;
pub mod report;

pub use config::{handle_config_command, ConfigCommands};
pub use report::{handle_report_command, ReportCommands};

use clap::ValueEnum;

/// How command output is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}
