//! Terminal formatting for month and trend reports

use super::report::{double_separator, format_bar, separator, truncate};
use crate::analytics::{
    CategoryBreakdownItem, CumulativeDataPoint, MonthReport, PayerBalance, Settlement,
    TrendReport,
};
use crate::models::PayerId;

const WIDTH: usize = 64;
const BAR_WIDTH: usize = 20;

/// Header, totals, per-payer and per-category×payer rows
pub fn format_summary(report: &MonthReport, symbol: &str) -> String {
    let summary = &report.summary;
    let mut output = String::new();

    output.push_str(&format!("Spending for {}\n", report.month));
    output.push_str(&double_separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Total: {}  ({} vs {} last month)\n\n",
        summary.grand_total.format_with_symbol(symbol),
        report.change,
        report.previous_total.format_with_symbol(symbol)
    ));

    output.push_str(&format!("{:<30} {:>14}\n", "Paid by", "Amount"));
    output.push_str(&separator(WIDTH));
    output.push('\n');
    for person in &summary.totals_by_person {
        let name = report
            .payer_name(person.payer_id)
            .map(str::to_string)
            .unwrap_or_else(|| person.payer_id.short());
        output.push_str(&format!(
            "{:<30} {:>14}\n",
            truncate(&name, 30),
            person.total.format_with_symbol(symbol)
        ));
    }

    if !summary.totals_by_category.is_empty() {
        output.push('\n');
        output.push_str(&format!("{:<24} {:<16} {:>14}\n", "Category", "Payer", "Amount"));
        output.push_str(&separator(WIDTH));
        output.push('\n');
        for row in &summary.totals_by_category {
            let name = report
                .payer_name(row.payer_id)
                .map(str::to_string)
                .unwrap_or_else(|| row.payer_id.short());
            output.push_str(&format!(
                "{:<24} {:<16} {:>14}\n",
                truncate(&row.category, 24),
                truncate(&name, 16),
                row.total.format_with_symbol(symbol)
            ));
        }
    }

    output
}

/// Category breakdown with proportional bars
pub fn format_breakdown(items: &[CategoryBreakdownItem], symbol: &str) -> String {
    if items.is_empty() {
        return "No spending recorded.\n".to_string();
    }

    let max = items.iter().map(|i| i.amount.cents()).max().unwrap_or(0);
    let mut output = String::new();
    output.push_str(&format!(
        "{:<20} {:>12} {:>5}  {}\n",
        "Category", "Amount", "%", "Share"
    ));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    for item in items {
        output.push_str(&format!(
            "{:<20} {:>12} {:>4}%  {}\n",
            truncate(&item.name, 20),
            item.amount.format_with_symbol(symbol),
            item.percentage,
            format_bar(item.amount.cents(), max, BAR_WIDTH)
        ));
    }

    output
}

/// Day-by-day running total
pub fn format_cumulative(points: &[CumulativeDataPoint], symbol: &str) -> String {
    let max = points.last().map(|p| p.cumulative.cents()).unwrap_or(0);
    let mut output = String::new();
    output.push_str(&format!("{:<12} {:>14}  {}\n", "Date", "Cumulative", ""));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    for point in points {
        output.push_str(&format!(
            "{:<12} {:>14}  {}\n",
            point.date.format("%Y-%m-%d"),
            point.cumulative.format_with_symbol(symbol),
            format_bar(point.cumulative.cents(), max, BAR_WIDTH)
        ));
    }

    output
}

/// Paid, share and balance per payer, then who owes whom
pub fn format_balances(
    balances: &[PayerBalance],
    settlement: Option<&Settlement>,
    symbol: &str,
) -> String {
    if balances.is_empty() {
        return "No payers in this household.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<20} {:>12} {:>12} {:>12}\n",
        "Payer", "Paid", "Share", "Balance"
    ));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    for balance in balances {
        output.push_str(&format!(
            "{:<20} {:>12} {:>12} {:>12}\n",
            truncate(&balance.payer_name, 20),
            balance.paid.format_with_symbol(symbol),
            balance.share.format_with_symbol(symbol),
            balance.balance.format_with_symbol(symbol)
        ));
    }

    output.push('\n');
    let name_of = |id: PayerId| {
        balances
            .iter()
            .find(|b| b.payer_id == id)
            .map(|b| b.payer_name.as_str())
            .unwrap_or("?")
    };
    match settlement {
        Some(s) => output.push_str(&format!(
            "{} owes {} {}\n",
            name_of(s.from),
            name_of(s.to),
            s.amount.format_with_symbol(symbol)
        )),
        None if balances.len() == 2 => output.push_str("All settled up.\n"),
        None => {}
    }

    output
}

/// Monthly totals, optionally followed by per-category rows
pub fn format_trends(report: &TrendReport, with_categories: bool, symbol: &str) -> String {
    let max = report
        .months
        .iter()
        .map(|m| m.total.cents())
        .max()
        .unwrap_or(0);
    let mut output = String::new();

    output.push_str(&format!("{:<10} {:>14}  {}\n", "Month", "Total", ""));
    output.push_str(&separator(WIDTH));
    output.push('\n');
    for month in &report.months {
        output.push_str(&format!(
            "{:<10} {:>14}  {}\n",
            format!("{} {}", month.label, month.month.year()),
            month.total.format_with_symbol(symbol),
            format_bar(month.total.cents(), max, BAR_WIDTH)
        ));
    }
    output.push_str(&format!(
        "\nAverage: {}\n",
        report.average_total().format_with_symbol(symbol)
    ));

    if with_categories {
        for point in &report.categories {
            output.push_str(&format!("\n{} ({})\n", point.month, point.label));
            for entry in &point.categories {
                output.push_str(&format!(
                    "  {:<22} {:>14}\n",
                    truncate(&entry.name, 22),
                    entry.total.format_with_symbol(symbol)
                ));
            }
        }
    }

    output
}

/// Every section of a month report
pub fn format_month_report(report: &MonthReport, symbol: &str) -> String {
    let mut output = format_summary(report, symbol);
    output.push_str("\nBy category\n");
    output.push_str(&format_breakdown(&report.breakdown, symbol));
    output.push_str("\nBalances\n");
    output.push_str(&format_balances(
        &report.balances,
        report.settlement.as_ref(),
        symbol,
    ));
    output
}
