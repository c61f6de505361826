use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use hearth_ledger::cli::{
    handle_config_command, handle_report_command, ConfigCommands, OutputFormat, ReportCommands,
};
use hearth_ledger::config::{LedgerPaths, Settings};
use hearth_ledger::storage::HouseholdSnapshot;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Shared household expense tracker",
    long_about = "hearth-ledger answers who spent what, on what, and who owes whom \
                  for a household's shared expenses, one month or several at a time."
)]
struct Cli {
    /// Household snapshot file (defaults to <config dir>/data/household.json)
    #[arg(long, global = true, env = "HEARTH_LEDGER_DATA")]
    data: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "hearth_ledger={level},ledger={level}",
            level = settings.log_level
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings);

    let data_file = cli.data.unwrap_or_else(|| paths.household_file());
    debug!(data = %data_file.display(), "resolved household snapshot");

    match cli.command {
        Some(Commands::Report(cmd)) => {
            let snapshot = HouseholdSnapshot::load(&data_file).with_context(|| {
                format!(
                    "could not load household data from {}",
                    data_file.display()
                )
            })?;
            handle_report_command(&snapshot, &settings, cli.format, cmd)?;
        }
        Some(Commands::Config { action }) => {
            let action = action.unwrap_or(ConfigCommands::Show);
            handle_config_command(&paths, &settings, &data_file, action)?;
        }
        None => {
            println!("hearth-ledger - shared household expenses");
            println!();
            println!("Run 'ledger --help' for usage information.");
            println!("Run 'ledger report summary' for this month's totals.");
        }
    }

    Ok(())
}
