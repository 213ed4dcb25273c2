//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing an OrderId where a ProductId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a generated order reference.
pub const ORDER_ID_LEN: usize = 8;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(OrderId);
define_id!(UserId);

impl ProductId {
    /// Numeric value of the id, for ids issued by the product store.
    ///
    /// Ids created elsewhere may be arbitrary strings, in which case this is `None`.
    pub fn as_number(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl OrderId {
    /// Generate a random order reference of uppercase letters and digits.
    pub fn generate() -> Self {
        use rand::Rng;

        const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
        let mut rng = rand::thread_rng();
        let id = (0..ORDER_ID_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "7".into();
        assert_eq!(id.as_number(), Some(7));

        let id: ProductId = "kbd-7".into();
        assert_eq!(id.as_number(), None);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&UserId::new("2")).unwrap();
        assert_eq!(json, "\"2\"");
    }

    #[test]
    fn test_order_id_shape() {
        let id = OrderId::generate();
        assert_eq!(id.as_str().len(), ORDER_ID_LEN);
        assert!(id
            .as_str()
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_order_ids_differ() {
        let ids: Vec<OrderId> = (0..20).map(|_| OrderId::generate()).collect();
        assert!(ids.iter().skip(1).any(|id| id != &ids[0]));
    }
}
