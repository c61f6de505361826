//! Multi-month trends
//!
//! Both functions take the months the caller asked for, keyed by `MonthKey`,
//! and report them oldest first. Months are never inferred: a month missing
//! from the map is missing from the output.

use serde::Serialize;
use std::collections::BTreeMap;

use super::breakdown::sum_by_category;
use super::palette::resolve_color;
use crate::models::{Category, Expense, Money, MonthKey};

/// Expenses grouped by the month they belong to
pub type ExpensesByMonth = BTreeMap<MonthKey, Vec<Expense>>;

/// Total spending in one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    pub month: MonthKey,
    /// Short month name, e.g. "Jan"
    pub label: String,
    pub total: Money,
}

/// One category's total within a trend month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTrendEntry {
    pub name: String,
    pub total: Money,
    pub color: String,
}

/// Every household category's total for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTrendPoint {
    pub month: MonthKey,
    pub label: String,
    pub categories: Vec<CategoryTrendEntry>,
}

/// Total spending per month
pub fn monthly_totals(by_month: &ExpensesByMonth) -> Vec<MonthlyTotal> {
    by_month
        .iter()
        .map(|(month, expenses)| MonthlyTotal {
            month: *month,
            label: month.label(),
            total: expenses.iter().map(|e| e.amount).sum(),
        })
        .collect()
}

/// Per-category totals for each month
///
/// Unlike the single-month breakdown this is dense: every category in
/// `categories` is listed for every month, with zero where nothing was spent,
/// and keeps the same colour from month to month so a chart legend stays
/// stable. Expenses whose label matches no household category are left out.
pub fn category_trends(
    by_month: &ExpensesByMonth,
    categories: &[Category],
) -> Vec<CategoryTrendPoint> {
    let colors: Vec<String> = categories
        .iter()
        .enumerate()
        .map(|(index, category)| resolve_color(category.color.as_deref(), index))
        .collect();

    by_month
        .iter()
        .map(|(month, expenses)| {
            let totals = sum_by_category(expenses);
            let entries = categories
                .iter()
                .zip(&colors)
                .map(|(category, color)| CategoryTrendEntry {
                    name: category.name.clone(),
                    total: totals
                        .get(category.name.as_str())
                        .copied()
                        .unwrap_or_default(),
                    color: color.clone(),
                })
                .collect();

            CategoryTrendPoint {
                month: *month,
                label: month.label(),
                categories: entries,
            }
        })
        .collect()
}
