//! Month-over-month change

use serde::Serialize;
use std::fmt;

use crate::models::Money;

/// Which way spending moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Flat => write!(f, "flat"),
        }
    }
}

/// Percentage change between two months
///
/// `percent_change` is never negative; the sign lives in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthChange {
    pub percent_change: u32,
    pub direction: Direction,
}

impl MonthChange {
    pub const FLAT: MonthChange = MonthChange {
        percent_change: 0,
        direction: Direction::Flat,
    };
}

impl fmt::Display for MonthChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Up => write!(f, "▲ {}%", self.percent_change),
            Direction::Down => write!(f, "▼ {}%", self.percent_change),
            Direction::Flat => write!(f, "no change"),
        }
    }
}

/// Compare this month's total against the previous month's
///
/// A zero previous month is not an error: no spend either month is flat, and
/// any spend after an empty month counts as a 100% increase. Changes that
/// round to under 1% are flat.
pub fn month_change(current: Money, previous: Money) -> MonthChange {
    if previous.is_zero() {
        return if current.is_zero() {
            MonthChange::FLAT
        } else {
            MonthChange {
                percent_change: 100,
                direction: Direction::Up,
            }
        };
    }

    let percent = (current - previous).percent_of(previous);
    let direction = match percent.signum() {
        1 => Direction::Up,
        -1 => Direction::Down,
        _ => return MonthChange::FLAT,
    };

    MonthChange {
        percent_change: u32::try_from(percent.unsigned_abs()).unwrap_or(u32::MAX),
        direction,
    }
}
