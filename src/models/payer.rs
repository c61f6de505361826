//! Payer model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::PayerId;

/// A household member who pays for expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payer {
    pub id: PayerId,
    pub display_name: String,
}

impl Payer {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            id: PayerId::new(),
            display_name: display_name.into(),
        }
    }
}

impl fmt::Display for Payer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}
