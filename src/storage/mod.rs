//! Storage boundary for hearth-ledger
//!
//! The analytics engine never reads data itself. Whatever holds the
//! household's records implements `ExpenseSource`; report builders ask it for
//! a month (or several) of live expenses plus the full category and payer
//! lists, then hand those to the engine.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_json, read_json_required, write_json_atomic};
pub use snapshot::HouseholdSnapshot;

use chrono::NaiveDate;

use crate::analytics::ExpensesByMonth;
use crate::error::LedgerResult;
use crate::models::{Category, Expense, MonthKey, Payer};

/// Read access to one household's records
pub trait ExpenseSource {
    /// Live (not deleted) expenses dated within `start..=end`
    fn expenses_between(&self, start: NaiveDate, end: NaiveDate) -> LedgerResult<Vec<Expense>>;

    /// Every household category, including ones with no spend
    fn categories(&self) -> LedgerResult<Vec<Category>>;

    /// Every household payer, including ones with no spend
    fn payers(&self) -> LedgerResult<Vec<Payer>>;

    /// Live expenses for one calendar month
    fn expenses_for_month(&self, month: MonthKey) -> LedgerResult<Vec<Expense>> {
        let (start, end) = month.bounds();
        self.expenses_between(start, end)
    }

    /// Live expenses for each requested month
    fn expenses_by_month(&self, months: &[MonthKey]) -> LedgerResult<ExpensesByMonth> {
        months
            .iter()
            .map(|month| Ok((*month, self.expenses_for_month(*month)?)))
            .collect()
    }
}
