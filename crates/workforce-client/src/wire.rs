//! Wire-level value types shared by every endpoint schema.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Record identifier.
///
/// The backend emits identifiers as JSON strings on some endpoints and as
/// integers on others. Both decode into the same string-backed value, and it
/// always serializes back as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

struct RecordIdVisitor;

impl<'de> Visitor<'de> for RecordIdVisitor {
    type Value = RecordId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-empty string or an integer identifier")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<RecordId, E> {
        if value.trim().is_empty() {
            return Err(E::invalid_value(de::Unexpected::Str(value), &self));
        }
        Ok(RecordId(value.to_string()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<RecordId, E> {
        Ok(RecordId(value.to_string()))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<RecordId, E> {
        Ok(RecordId(value.to_string()))
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RecordIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_string_and_integer_ids() {
        let from_str: RecordId = serde_json::from_str("\"42\"").unwrap();
        let from_int: RecordId = serde_json::from_str("42").unwrap();
        assert_eq!(from_str, from_int);
        assert_eq!(from_int.as_str(), "42");
    }

    #[test]
    fn always_serializes_as_string() {
        let id = RecordId::from(7u64);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(serde_json::from_str::<RecordId>("\"\"").is_err());
        assert!(serde_json::from_str::<RecordId>("null").is_err());
        assert!(serde_json::from_str::<RecordId>("4.5").is_err());
        assert!(serde_json::from_str::<RecordId>("{\"id\":1}").is_err());
    }
}
