//! Expense model
//!
//! One dated, categorized purchase paid for by a single household member.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{ExpenseId, PayerId};
use super::money::Money;

/// A household expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount in minor units (never negative)
    pub amount: Money,

    /// Who paid
    pub payer_id: PayerId,

    /// Calendar date of the purchase
    pub date: NaiveDate,

    /// Category label, matched against `Category::name`
    pub category: String,

    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Soft-delete flag; deleted expenses never reach the analytics engine
    #[serde(default)]
    pub deleted: bool,
}

impl Expense {
    /// Create a new live expense
    pub fn new(
        payer_id: PayerId,
        date: NaiveDate,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            payer_id,
            date,
            category: category.into(),
            note: None,
            deleted: false,
        }
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Whether this record is live (not soft-deleted)
    pub fn is_live(&self) -> bool {
        !self.deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default_on_deserialize() {
        let payer = PayerId::new();
        let json = format!(
            r#"{{"id":"{}","amount":4000,"payer_id":"{}","date":"2025-01-05","category":"Groceries"}}"#,
            ExpenseId::new().as_uuid(),
            payer.as_uuid()
        );
        let expense: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense.amount, Money::from_cents(4000));
        assert_eq!(expense.payer_id, payer);
        assert!(expense.note.is_none());
        assert!(expense.is_live());
    }

    #[test]
    fn test_with_note() {
        let expense = Expense::new(
            PayerId::new(),
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            Money::from_cents(1299),
            "Dining",
        )
        .with_note("pizza night");
        assert_eq!(expense.note.as_deref(), Some("pizza night"));
    }
}
