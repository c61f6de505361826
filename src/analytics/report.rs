//! Month and trend reports
//!
//! Fetches from an `ExpenseSource` and runs the engine functions to build
//! everything a month view or trend chart shows.

use serde::Serialize;
use tracing::{debug, info};

use super::balance::{payer_balance_with, settlement, PayerBalance, Settlement, SplitPolicy};
use super::breakdown::{category_breakdown, CategoryBreakdownItem};
use super::change::{month_change, MonthChange};
use super::cumulative::{cumulative_spending, CumulativeDataPoint};
use super::summary::{summarize, MonthSummary};
use super::trends::{category_trends, monthly_totals, CategoryTrendPoint, MonthlyTotal};
use crate::error::LedgerResult;
use crate::models::{Money, MonthKey, PayerId};
use crate::storage::ExpenseSource;

/// Everything known about one month's spending
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthReport {
    pub month: MonthKey,
    pub summary: MonthSummary,
    pub breakdown: Vec<CategoryBreakdownItem>,
    pub cumulative: Vec<CumulativeDataPoint>,
    pub previous_total: Money,
    pub change: MonthChange,
    pub split_policy: SplitPolicy,
    pub balances: Vec<PayerBalance>,
    pub settlement: Option<Settlement>,
}

impl MonthReport {
    /// Build the report for `month`, comparing against the month before it
    ///
    /// For 0001-01 there is no month before, so the previous total is zero.
    pub fn build<S>(source: &S, month: MonthKey, policy: SplitPolicy) -> LedgerResult<Self>
    where
        S: ExpenseSource + ?Sized,
    {
        let payers = source.payers()?;
        let categories = source.categories()?;
        let expenses = source.expenses_for_month(month)?;
        let previous = match month.previous() {
            Some(previous) => source.expenses_for_month(previous)?,
            None => Vec::new(),
        };
        debug!(
            %month,
            expenses = expenses.len(),
            previous = previous.len(),
            "building month report"
        );

        let summary = summarize(&expenses, &payers);
        let previous_total: Money = previous.iter().map(|e| e.amount).sum();
        let balances = payer_balance_with(&expenses, &payers, policy);
        let settlement = settlement(&balances);

        let drift: Money = balances.iter().map(|b| b.balance).sum();
        if !drift.is_zero() {
            info!(%month, drift = drift.cents(), %policy, "fair shares do not add up to the total");
        }

        Ok(Self {
            month,
            breakdown: category_breakdown(&expenses, &categories),
            cumulative: cumulative_spending(&expenses, month),
            change: month_change(summary.grand_total, previous_total),
            previous_total,
            summary,
            split_policy: policy,
            balances,
            settlement,
        })
    }

    /// Display name for a payer in this report
    pub fn payer_name(&self, payer_id: PayerId) -> Option<&str> {
        self.balances
            .iter()
            .find(|b| b.payer_id == payer_id)
            .map(|b| b.payer_name.as_str())
    }
}

/// Spending over a run of consecutive months
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendReport {
    pub months: Vec<MonthlyTotal>,
    pub categories: Vec<CategoryTrendPoint>,
}

impl TrendReport {
    /// Build trends for the `count` months ending with `end`
    ///
    /// # Errors
    ///
    /// A parse error when the run would start before 0001-01.
    pub fn build<S>(source: &S, end: MonthKey, count: usize) -> LedgerResult<Self>
    where
        S: ExpenseSource + ?Sized,
    {
        let months = end.trailing(count)?;
        let by_month = source.expenses_by_month(&months)?;
        let categories = source.categories()?;
        debug!(%end, months = months.len(), "building trend report");

        Ok(Self {
            months: monthly_totals(&by_month),
            categories: category_trends(&by_month, &categories),
        })
    }

    /// Average monthly total across the reported months
    pub fn average_total(&self) -> Money {
        let total: Money = self.months.iter().map(|m| m.total).sum();
        total.rounded_share(self.months.len())
    }
}
