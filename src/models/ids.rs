//! Transaction identifiers
//!
//! Ids are opaque strings. New ids are random UUIDs, but any string loaded
//! from an existing data file is accepted as-is.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a transaction within the ledger
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, used in table output
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TransactionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique_uuids() {
        let a = TransactionId::new();
        let b = TransactionId::new();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_short() {
        let id = TransactionId::from("550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(id.short(), "550e8400");

        let tiny = TransactionId::from("abc");
        assert_eq!(tiny.short(), "abc");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = TransactionId::from("tx-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"tx-1\"");
        let back: TransactionId = serde_json::from_str("\"tx-1\"").unwrap();
        assert_eq!(back, id);
    }
}
