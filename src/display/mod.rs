//! Display formatting for terminal output

pub mod month;
pub mod report;

pub use month::{
    format_balances, format_breakdown, format_cumulative, format_month_report, format_summary,
    format_trends,
};
