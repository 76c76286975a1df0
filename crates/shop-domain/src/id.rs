//! Newtype wrappers for domain identifiers.
//!
//! Identifiers are opaque strings (at most [`MAX_ID_LEN`] chars, matching the
//! `VARCHAR(36)` key columns). Fresh ones are hyphenated UUID v4.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest identifier the storage layer accepts.
pub const MAX_ID_LEN: usize = 36;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Mint a new random identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether this id could exist in storage (non-empty, fits the key column).
            pub fn is_well_formed(&self) -> bool {
                !self.0.is_empty() && self.0.len() <= MAX_ID_LEN
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

string_id!(
    /// Identifies a catalog product.
    ProductId
);

string_id!(
    /// Identifies an order.
    OrderId
);

string_id!(
    /// Identifies one line item of an order.
    OrderDetailId
);
