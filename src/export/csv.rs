//! CSV export of month reports
//!
//! A month report is written as one long-format table so every section fits
//! in a single file: `Month,Section,Name,Amount,Detail`. Amounts are major
//! units with two decimals.

use std::io::Write;

use crate::analytics::MonthReport;
use crate::error::LedgerResult;
use crate::models::Money;

const HEADER: [&str; 5] = ["Month", "Section", "Name", "Amount", "Detail"];

fn amount(money: Money) -> String {
    format!("{:.2}", money.to_major())
}

/// Write a month report as CSV
pub fn export_month_report_csv<W: Write>(report: &MonthReport, writer: W) -> LedgerResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    let month = report.month.to_string();
    out.write_record(HEADER)?;

    out.write_record([
        month.as_str(),
        "total",
        "",
        amount(report.summary.grand_total).as_str(),
        report.change.to_string().as_str(),
    ])?;

    for person in &report.summary.totals_by_person {
        let name = report
            .payer_name(person.payer_id)
            .map(str::to_string)
            .unwrap_or_else(|| person.payer_id.short());
        out.write_record([
            month.as_str(),
            "payer",
            name.as_str(),
            amount(person.total).as_str(),
            "",
        ])?;
    }

    for item in &report.breakdown {
        out.write_record([
            month.as_str(),
            "category",
            item.name.as_str(),
            amount(item.amount).as_str(),
            format!("{}%", item.percentage).as_str(),
        ])?;
    }

    for point in &report.cumulative {
        out.write_record([
            month.as_str(),
            "cumulative",
            point.date.format("%Y-%m-%d").to_string().as_str(),
            amount(point.cumulative).as_str(),
            "",
        ])?;
    }

    for balance in &report.balances {
        out.write_record([
            month.as_str(),
            "balance",
            balance.payer_name.as_str(),
            amount(balance.balance).as_str(),
            format!("paid {} share {}", amount(balance.paid), amount(balance.share)).as_str(),
        ])?;
    }

    if let Some(settlement) = &report.settlement {
        let from = report.payer_name(settlement.from).unwrap_or_default();
        let to = report.payer_name(settlement.to).unwrap_or_default();
        out.write_record([
            month.as_str(),
            "settlement",
            format!("{from} -> {to}").as_str(),
            amount(settlement.amount).as_str(),
            "",
        ])?;
    }

    out.flush()?;
    Ok(())
}
