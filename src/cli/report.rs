//! CLI commands for reports
//!
//! Each command loads what it needs from an `ExpenseSource`, builds the
//! report and prints it as text or JSON.

use clap::Subcommand;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

use super::OutputFormat;
use crate::analytics::{MonthReport, PayerBalance, Settlement, SplitPolicy, TrendReport};
use crate::config::Settings;
use crate::display;
use crate::error::{LedgerError, LedgerResult};
use crate::export::export_month_report_csv;
use crate::models::MonthKey;
use crate::storage::ExpenseSource;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Totals per payer and per category for a month
    Summary {
        /// Month to report on (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Spending by category, largest first
    Breakdown {
        /// Month to report on (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Day-by-day cumulative spending
    #[command(alias = "cumulative")]
    Daily {
        /// Month to report on (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// What each payer paid against their fair share, and who owes whom
    #[command(alias = "settle")]
    Balance {
        /// Month to report on (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,

        /// How the total is divided into fair shares (defaults to the configured policy)
        #[arg(long, value_enum)]
        split: Option<SplitPolicy>,
    },

    /// Monthly totals over several months
    Trend {
        /// Last month of the trend (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,

        /// Number of months to include
        #[arg(short = 'n', long)]
        months: Option<usize>,

        /// Also list every category's total for each month
        #[arg(long)]
        categories: bool,
    },

    /// Full month report
    Month {
        /// Month to report on (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command<S>(
    source: &S,
    settings: &Settings,
    format: OutputFormat,
    cmd: ReportCommands,
) -> LedgerResult<()>
where
    S: ExpenseSource + ?Sized,
{
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary { month } => {
            let report = MonthReport::build(source, parse_month(month)?, settings.split_policy)?;
            emit(format, &report.summary, || {
                display::format_summary(&report, symbol)
            })
        }
        ReportCommands::Breakdown { month } => {
            let report = MonthReport::build(source, parse_month(month)?, settings.split_policy)?;
            emit(format, &report.breakdown, || {
                display::format_breakdown(&report.breakdown, symbol)
            })
        }
        ReportCommands::Daily { month } => {
            let report = MonthReport::build(source, parse_month(month)?, settings.split_policy)?;
            emit(format, &report.cumulative, || {
                display::format_cumulative(&report.cumulative, symbol)
            })
        }
        ReportCommands::Balance { month, split } => {
            let policy = split.unwrap_or(settings.split_policy);
            let report = MonthReport::build(source, parse_month(month)?, policy)?;
            let view = BalanceView {
                split_policy: policy,
                balances: &report.balances,
                settlement: report.settlement.as_ref(),
            };
            emit(format, &view, || {
                display::format_balances(&report.balances, report.settlement.as_ref(), symbol)
            })
        }
        ReportCommands::Trend {
            month,
            months,
            categories,
        } => {
            let count = months.unwrap_or(settings.trend_months).max(1);
            let report = TrendReport::build(source, parse_month(month)?, count)?;
            emit(format, &report, || {
                display::format_trends(&report, categories, symbol)
            })
        }
        ReportCommands::Month { month, output } => {
            let report = MonthReport::build(source, parse_month(month)?, settings.split_policy)?;
            if let Some(path) = output {
                let file = File::create(&path).map_err(|e| {
                    LedgerError::Export(format!(
                        "Failed to create file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                export_month_report_csv(&report, BufWriter::new(file))?;
                info!(path = %path.display(), "exported month report");
                println!("Month report exported to: {}", path.display());
                Ok(())
            } else {
                emit(format, &report, || {
                    display::format_month_report(&report, symbol)
                })
            }
        }
    }
}

#[derive(Serialize)]
struct BalanceView<'a> {
    split_policy: SplitPolicy,
    balances: &'a [PayerBalance],
    settlement: Option<&'a Settlement>,
}

/// Parse `--month`, defaulting to the current month
fn parse_month(month: Option<String>) -> LedgerResult<MonthKey> {
    match month {
        Some(s) => Ok(MonthKey::parse(&s)?),
        None => Ok(MonthKey::current()?),
    }
}

fn emit<T, F>(format: OutputFormat, value: &T, text: F) -> LedgerResult<()>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    match format {
        OutputFormat::Text => print!("{}", text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
