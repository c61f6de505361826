//! Monthly totals by payer and by category
//!
//! Per-payer totals are dense: every household payer gets a row, even with
//! nothing spent, so a UI can always show every member. Category×payer totals
//! are sparse: a pair only appears once it has at least one expense.

use serde::Serialize;
use std::collections::HashMap;

use crate::models::{Expense, Money, Payer, PayerId};

/// Total spent by one payer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonTotal {
    pub payer_id: PayerId,
    pub total: Money,
}

/// Total spent by one payer within one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPersonTotal {
    pub category: String,
    pub payer_id: PayerId,
    pub total: Money,
}

/// Aggregated totals for a month
///
/// `grand_total` always equals the sum of `totals_by_person` and the sum of
/// `totals_by_category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    pub totals_by_person: Vec<PersonTotal>,
    pub totals_by_category: Vec<CategoryPersonTotal>,
    pub grand_total: Money,
}

impl MonthSummary {
    /// Total for a payer, zero if they have no row
    pub fn total_for(&self, payer_id: PayerId) -> Money {
        self.totals_by_person
            .iter()
            .find(|t| t.payer_id == payer_id)
            .map(|t| t.total)
            .unwrap_or_default()
    }

    /// Sum of every category×payer row for a category
    pub fn category_total(&self, category: &str) -> Money {
        self.totals_by_category
            .iter()
            .filter(|t| t.category == category)
            .map(|t| t.total)
            .sum()
    }
}

/// Summarize a month's expenses
///
/// Payer rows follow the order of `payers`. An expense paid by someone not in
/// `payers` still counts: that payer gets a row appended after the household
/// members, so the totals always reconcile. Category rows appear in the order
/// their first expense was seen.
pub fn summarize(expenses: &[Expense], payers: &[Payer]) -> MonthSummary {
    // One zero row per household payer before any expense is looked at
    let mut totals_by_person: Vec<PersonTotal> = Vec::with_capacity(payers.len());
    let mut person_rows: HashMap<PayerId, usize> = HashMap::with_capacity(payers.len());
    for payer in payers {
        person_rows.entry(payer.id).or_insert_with(|| {
            totals_by_person.push(PersonTotal {
                payer_id: payer.id,
                total: Money::zero(),
            });
            totals_by_person.len() - 1
        });
    }

    let mut totals_by_category: Vec<CategoryPersonTotal> = Vec::new();
    let mut category_rows: HashMap<(&str, PayerId), usize> = HashMap::new();
    let mut grand_total = Money::zero();

    for expense in expenses {
        grand_total += expense.amount;

        let person_row = *person_rows.entry(expense.payer_id).or_insert_with(|| {
            totals_by_person.push(PersonTotal {
                payer_id: expense.payer_id,
                total: Money::zero(),
            });
            totals_by_person.len() - 1
        });
        totals_by_person[person_row].total += expense.amount;

        let category_row = *category_rows
            .entry((expense.category.as_str(), expense.payer_id))
            .or_insert_with(|| {
                totals_by_category.push(CategoryPersonTotal {
                    category: expense.category.clone(),
                    payer_id: expense.payer_id,
                    total: Money::zero(),
                });
                totals_by_category.len() - 1
            });
        totals_by_category[category_row].total += expense.amount;
    }

    MonthSummary {
        totals_by_person,
        totals_by_category,
        grand_total,
    }
}
