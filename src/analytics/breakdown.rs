//! Single-month spending breakdown by category
//!
//! The breakdown is sparse: categories with no spend are left out entirely.
//! Compare `trends::category_trends`, which lists every category.

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use super::palette::resolve_color;
use crate::models::{Category, Expense, Money};

/// One category's share of the month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdownItem {
    pub name: String,
    pub amount: Money,
    /// Whole-number share of the grand total, 0 to 100
    pub percentage: u32,
    pub color: String,
}

/// Sum expense amounts per category label
pub(crate) fn sum_by_category(expenses: &[Expense]) -> HashMap<&str, Money> {
    let mut totals: HashMap<&str, Money> = HashMap::new();
    for expense in expenses {
        *totals.entry(expense.category.as_str()).or_default() += expense.amount;
    }
    totals
}

/// Break a month's spending down by category, largest first
///
/// Percentages are taken against the total of all `expenses`. Colours come
/// from the category's stored colour or, failing that, the fallback palette
/// indexed by position among the categories that actually have spend:
/// household categories in list order, then labels not in `categories` in
/// the order they were first seen. Sorting by amount happens after colours
/// are assigned and keeps that order for ties.
pub fn category_breakdown(
    expenses: &[Expense],
    categories: &[Category],
) -> Vec<CategoryBreakdownItem> {
    let grand_total: Money = expenses.iter().map(|e| e.amount).sum();
    if !grand_total.is_positive() {
        return Vec::new();
    }

    let totals = sum_by_category(expenses);

    let mut seen: HashSet<&str> = HashSet::new();
    let mut candidates: Vec<(&str, Option<&str>)> = Vec::new();
    for category in categories {
        if seen.insert(category.name.as_str()) {
            candidates.push((category.name.as_str(), category.color.as_deref()));
        }
    }
    for expense in expenses {
        if seen.insert(expense.category.as_str()) {
            candidates.push((expense.category.as_str(), None));
        }
    }

    let mut items: Vec<CategoryBreakdownItem> = candidates
        .into_iter()
        .filter_map(|(name, color)| {
            let amount = totals.get(name).copied().unwrap_or_default();
            amount.is_positive().then_some((name, color, amount))
        })
        .enumerate()
        .map(|(index, (name, color, amount))| CategoryBreakdownItem {
            name: name.to_string(),
            amount,
            percentage: amount.percent_of(grand_total).clamp(0, 100) as u32,
            color: resolve_color(color, index),
        })
        .collect();

    items.sort_by(|a, b| b.amount.cmp(&a.amount));
    items
}
