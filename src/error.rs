//! Custom error types for hearth-ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The analytics engine itself never fails;
//! these errors belong to the layers around it (config, snapshot loading,
//! input parsing and export).

use thiserror::Error;

use crate::models::money::MoneyParseError;
use crate::models::month::MonthKeyError;

/// The main error type for hearth-ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Snapshot storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// User input that could not be parsed (months, amounts, dates)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<MonthKeyError> for LedgerError {
    fn from(err: MonthKeyError) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<MoneyParseError> for LedgerError {
    fn from(err: MoneyParseError) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for hearth-ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }

    #[test]
    fn test_from_month_key_error() {
        let err: LedgerError = MonthKeyError::InvalidMonth(13).into();
        assert!(err.is_parse());
        assert_eq!(err.to_string(), "Parse error: Invalid month: 13");
    }
}
