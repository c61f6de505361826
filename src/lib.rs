//! hearth-ledger - shared household expense tracking
//!
//! Household members log dated, categorized expenses, each paid by one of
//! them. This crate turns a month (or several months) of those records into
//! the numbers a household wants to see: totals per person and category,
//! day-by-day spending, month-over-month change, multi-month trends, and who
//! owes whom.
//!
//! # Architecture
//!
//! - `models`: money, calendar months and the household record types
//! - `analytics`: the pure spending analytics engine
//! - `storage`: the `ExpenseSource` boundary and a JSON snapshot adapter
//! - `config`: paths and user settings
//! - `display` / `export` / `cli`: terminal, CSV and command-line front ends
//! - `error`: crate error types
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use hearth_ledger::analytics::{payer_balance, settlement, summarize};
//! use hearth_ledger::models::{Expense, Money, Payer};
//!
//! let alice = Payer::new("Alice");
//! let bob = Payer::new("Bob");
//! let day = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
//! let expenses = vec![
//!     Expense::new(alice.id, day, Money::from_cents(8000), "Groceries"),
//!     Expense::new(bob.id, day, Money::from_cents(2000), "Groceries"),
//! ];
//! let payers = vec![alice.clone(), bob.clone()];
//!
//! assert_eq!(summarize(&expenses, &payers).grand_total.cents(), 10000);
//!
//! let owed = settlement(&payer_balance(&expenses, &payers)).unwrap();
//! assert_eq!(owed.from, bob.id);
//! assert_eq!(owed.amount.cents(), 3000);
//! ```

pub mod analytics;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
