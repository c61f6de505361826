//! Calendar month keys
//!
//! A `MonthKey` identifies one calendar month as `YYYY-MM`. Years are kept to
//! four digits so the string form sorts the same way as the months themselves.
//! Stepping from one month to the next never leaves that range: it returns
//! `None` (or an error) instead.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A calendar month, displayed and serialized as `YYYY-MM`
///
/// Internally this is the first day of the month, so ordering, hashing and
/// equality all follow the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    first: NaiveDate,
}

impl MonthKey {
    /// Create a month key, validating the month number and year range
    ///
    /// # Examples
    /// ```
    /// use hearth_ledger::models::MonthKey;
    /// let feb = MonthKey::new(2024, 2).unwrap();
    /// assert_eq!(feb.days_in_month(), 29);
    /// assert!(MonthKey::new(2024, 13).is_err());
    /// ```
    pub fn new(year: i32, month: u32) -> Result<Self, MonthKeyError> {
        if !(1..=12).contains(&month) {
            return Err(MonthKeyError::InvalidMonth(month));
        }
        if !(1..=9999).contains(&year) {
            return Err(MonthKeyError::InvalidYear(year));
        }
        let first =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or(MonthKeyError::InvalidYear(year))?;
        Ok(Self { first })
    }

    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Result<Self, MonthKeyError> {
        Self::new(date.year(), date.month())
    }

    /// The month containing today's local date
    pub fn current() -> Result<Self, MonthKeyError> {
        Self::of(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Number of calendar days in this month (28 to 31)
    pub fn days_in_month(&self) -> u32 {
        // chrono's calendar reaches far past year 9999, so the add never fails
        self.first
            .checked_add_months(Months::new(1))
            .map_or(31, |following| (following - self.first).num_days() as u32)
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Last day of the month (inclusive)
    pub fn last_day(&self) -> NaiveDate {
        self.first + Duration::days(i64::from(self.days_in_month()) - 1)
    }

    /// First and last day of the month, both inclusive
    pub fn bounds(&self) -> (NaiveDate, NaiveDate) {
        (self.first_day(), self.last_day())
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day() && date <= self.last_day()
    }

    /// Every day of the month in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.first.iter_days().take(self.days_in_month() as usize)
    }

    /// The following month, rolling December over into January
    ///
    /// `None` after 9999-12.
    pub fn next(&self) -> Option<Self> {
        let first = self.first.checked_add_months(Months::new(1))?;
        Self::of(first).ok()
    }

    /// The preceding month, rolling January back into December
    ///
    /// `None` before 0001-01.
    pub fn previous(&self) -> Option<Self> {
        let first = self.first.checked_sub_months(Months::new(1))?;
        Self::of(first).ok()
    }

    /// Months elapsed since 0001-01
    fn ordinal(&self) -> usize {
        (self.year() as usize - 1) * 12 + self.first.month0() as usize
    }

    /// The `count` months ending with this one, oldest first
    ///
    /// # Errors
    ///
    /// `InvalidYear(0)` when the run would start before 0001-01.
    pub fn trailing(&self, count: usize) -> Result<Vec<Self>, MonthKeyError> {
        if count > self.ordinal() + 1 {
            return Err(MonthKeyError::InvalidYear(0));
        }
        let mut months: Vec<Self> = std::iter::successors(Some(*self), Self::previous)
            .take(count)
            .collect();
        months.reverse();
        Ok(months)
    }

    /// Short English month name ("Jan", "Feb", ...)
    pub fn label(&self) -> String {
        self.first.format("%b").to_string()
    }

    /// Parse a `YYYY-MM` string
    pub fn parse(s: &str) -> Result<Self, MonthKeyError> {
        let s = s.trim();
        let invalid = || MonthKeyError::InvalidFormat(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        if !year.chars().chain(month.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = MonthKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MonthKey> for String {
    fn from(month: MonthKey) -> Self {
        month.to_string()
    }
}

/// Error type for month key parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthKeyError {
    #[error("Invalid month format: {0} (expected YYYY-MM)")]
    InvalidFormat(String),
    #[error("Invalid month: {0}")]
    InvalidMonth(u32),
    #[error("Year out of range: {0}")]
    InvalidYear(i32),
}
