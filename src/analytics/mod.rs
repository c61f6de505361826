//! Spending analytics engine
//!
//! Pure functions from a month's (or several months') expenses plus the
//! household's categories and payers to the aggregates the application
//! shows. Nothing here does I/O, keeps state or mutates its input; calling a
//! function twice with the same input gives the same output.
//!
//! Every amount is integer minor units. Percentages and shares use
//! `models::round_div`, which rounds halves up.

pub mod balance;
pub mod breakdown;
pub mod change;
pub mod cumulative;
pub mod palette;
pub mod report;
pub mod summary;
pub mod trends;

pub use balance::{
    payer_balance, payer_balance_with, settlement, PayerBalance, Settlement, SplitPolicy,
    SETTLED_TOLERANCE,
};
pub use breakdown::{category_breakdown, CategoryBreakdownItem};
pub use change::{month_change, Direction, MonthChange};
pub use cumulative::{cumulative_spending, CumulativeDataPoint};
pub use palette::FALLBACK_PALETTE;
pub use report::{MonthReport, TrendReport};
pub use summary::{summarize, CategoryPersonTotal, MonthSummary, PersonTotal};
pub use trends::{
    category_trends, monthly_totals, CategoryTrendEntry, CategoryTrendPoint, ExpensesByMonth,
    MonthlyTotal,
};
