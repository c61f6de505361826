//! Category model
//!
//! Categories are household-wide labels for expenses. Expenses refer to them
//! by name, so names are unique within a household.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// A spending category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name (unique within the household)
    pub name: String,

    /// Position in lists and chart legends
    #[serde(default)]
    pub display_order: i32,

    /// Colour token used when charting this category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Category {
    /// Create a new category with no stored colour
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            display_order: 0,
            color: None,
        }
    }

    /// Create a new category with a specific display order
    pub fn with_display_order(name: impl Into<String>, display_order: i32) -> Self {
        let mut category = Self::new(name);
        category.display_order = display_order;
        category
    }

    /// Set the stored colour
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
