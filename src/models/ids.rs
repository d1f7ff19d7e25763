//! Strongly-typed ID wrappers for stored entities
//!
//! Newtype wrappers keep expense and milestone IDs from being mixed up at
//! compile time. IDs display in a short prefixed form (`exp-1a2b3c4d`) which
//! the services also accept as a lookup key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// The display prefix for this ID type
            pub const fn prefix() -> &'static str {
                $display_prefix
            }

            /// Check whether a user-supplied identifier refers to this ID
            ///
            /// Accepts the full UUID, the short display form, or any prefix of
            /// the UUID text with or without the display prefix.
            pub fn matches(&self, identifier: &str) -> bool {
                let needle = identifier.trim();
                let needle = needle.strip_prefix($display_prefix).unwrap_or(needle);
                !needle.is_empty() && self.0.to_string().starts_with(&needle.to_lowercase())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(ExpenseId, "exp-");
define_id!(MilestoneId, "mil-");
