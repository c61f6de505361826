//! Export functionality for hearth-ledger
//!
//! CSV export of reports. JSON output is the reports' own serde form.

pub mod csv;

pub use self::csv::export_month_report_csv;
