//! Day-by-day cumulative spending for a month

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::trace;

use crate::models::{Expense, Money, MonthKey};

/// Running total at the end of one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CumulativeDataPoint {
    pub date: NaiveDate,
    pub cumulative: Money,
}

/// Build the running total for every day of `month`
///
/// Always returns exactly `month.days_in_month()` points. Days without
/// expenses repeat the previous value, so the series never decreases and its
/// last point is the month's total. Expenses dated outside `month` are
/// skipped.
pub fn cumulative_spending(expenses: &[Expense], month: MonthKey) -> Vec<CumulativeDataPoint> {
    let mut by_day = vec![Money::zero(); month.days_in_month() as usize];

    for expense in expenses {
        if !month.contains(expense.date) {
            trace!(
                expense = %expense.id,
                date = %expense.date,
                %month,
                "skipping expense outside month"
            );
            continue;
        }
        by_day[expense.date.day0() as usize] += expense.amount;
    }

    let mut running = Money::zero();
    month
        .days()
        .zip(by_day)
        .map(|(date, spent)| {
            running += spent;
            CumulativeDataPoint {
                date,
                cumulative: running,
            }
        })
        .collect()
}
