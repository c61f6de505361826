//! JSON household snapshot
//!
//! A snapshot is one JSON document holding a household's payers, categories
//! and expenses, as exported from the hosted backend. It is read once and
//! queried in memory.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::file_io::read_json_required;
use super::ExpenseSource;
use crate::error::LedgerResult;
use crate::models::{Category, Expense, Payer};

/// Everything the analytics engine needs about one household
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdSnapshot {
    #[serde(default)]
    pub payers: Vec<Payer>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl HouseholdSnapshot {
    /// Load a snapshot file; the file must exist
    pub fn load(path: impl AsRef<Path>) -> LedgerResult<Self> {
        let path = path.as_ref();
        let snapshot: Self = read_json_required(path)?;
        debug!(
            path = %path.display(),
            payers = snapshot.payers.len(),
            categories = snapshot.categories.len(),
            expenses = snapshot.expenses.len(),
            "loaded household snapshot"
        );
        Ok(snapshot)
    }

    /// Live expenses only
    pub fn live_expenses(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.iter().filter(|e| e.is_live())
    }
}

impl ExpenseSource for HouseholdSnapshot {
    fn expenses_between(&self, start: NaiveDate, end: NaiveDate) -> LedgerResult<Vec<Expense>> {
        Ok(self
            .live_expenses()
            .filter(|e| e.date >= start && e.date <= end)
            .cloned()
            .collect())
    }

    /// Categories in display order; ties keep file order
    fn categories(&self) -> LedgerResult<Vec<Category>> {
        let mut categories = self.categories.clone();
        categories.sort_by_key(|c| c.display_order);
        Ok(categories)
    }

    fn payers(&self) -> LedgerResult<Vec<Payer>> {
        Ok(self.payers.clone())
    }
}
