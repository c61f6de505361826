//! Core data models for hearth-ledger
//!
//! This module contains the value types the analytics engine works on:
//! money, calendar months, expenses and the household's reference data
//! (categories and payers).

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;
pub mod payer;

pub use category::Category;
pub use expense::Expense;
pub use ids::{CategoryId, ExpenseId, PayerId};
pub use money::{round_div, Money, MoneyParseError};
pub use month::{MonthKey, MonthKeyError};
pub use payer::Payer;
