//! Strongly-typed ID wrappers for household records
//!
//! Expenses, categories and payers are all keyed by UUIDs. Wrapping each in
//! its own newtype keeps a payer id from being passed where a category id is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Short human-facing form, e.g. `pay-1a2b3c4d`
            pub fn short(&self) -> String {
                let simple = self.0.simple().to_string();
                format!("{}{}", $prefix, &simple[..8])
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.short())
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($prefix).unwrap_or(s);
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

id_type!(
    /// Identifies a single expense record
    ExpenseId,
    "exp-"
);
id_type!(
    /// Identifies a household spending category
    CategoryId,
    "cat-"
);
id_type!(
    /// Identifies a household member who pays for things
    PayerId,
    "pay-"
);
