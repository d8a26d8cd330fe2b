//! Entity identifiers
//!
//! Every aggregate in the service is keyed by an [`EntityId`], a UUID v7 wrapper.
//! Version 7 UUIDs embed a millisecond timestamp in their most significant bits,
//! so identifiers generated later sort after identifiers generated earlier, both
//! as bytes and in their hyphenated string form.
//!
//! ```
//! use entity_id::EntityId;
//!
//! let id = EntityId::new();
//! let parsed: EntityId = id.to_string().parse().unwrap();
//! assert_eq!(id, parsed);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Returned when a string is not a valid identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid identifier: '{0}'")]
pub struct InvalidIdentifier(pub String);

/// Globally unique, time-ordered identifier used as primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Decode the string form of an identifier.
    pub fn parse(input: &str) -> Result<Self, InvalidIdentifier> {
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|_| InvalidIdentifier(input.to_string()))
    }

    /// The nil identifier never comes out of [`EntityId::new`]; it marks an unset id.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

impl FromStr for EntityId {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for EntityId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<EntityId> for Uuid {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let a = EntityId::new();
        let b = EntityId::new();
        assert_ne!(a, b);
        assert!(!a.is_nil());
    }

    #[test]
    fn test_ids_sort_by_creation_order() {
        let ids: Vec<EntityId> = (0..50).map(|_| EntityId::new()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);

        let strings: Vec<String> = ids.iter().map(ToString::to_string).collect();
        let mut sorted_strings = strings.clone();
        sorted_strings.sort();
        assert_eq!(strings, sorted_strings);
    }

    #[test]
    fn test_parse_accepts_display_form() {
        let id = EntityId::new();
        assert_eq!(EntityId::parse(&id.to_string()), Ok(id));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        let err = EntityId::parse("not-an-id").unwrap_err();
        assert_eq!(err, InvalidIdentifier("not-an-id".to_string()));
        assert!(EntityId::parse("").is_err());
        assert!("1234".parse::<EntityId>().is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = EntityId::new();
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_string()));

        let back: EntityId = serde_json::from_value(json).unwrap();
        assert_eq!(back, id);
    }
}
