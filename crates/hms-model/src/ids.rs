#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// An opaque unique identifier assigned to an entity at creation time.
///
/// Ids are hyphenated UUIDv4 strings. They are never reused or recycled;
/// a deleted entity's id simply disappears with it.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct EntityId(String);

impl EntityId {
    /// Generate a fresh id, unique for all practical purposes.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Wrap an existing id string, rejecting blank input.
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = EntityId::generate();
        let b = EntityId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn blank_id_rejected() {
        assert_eq!(
            EntityId::new("   "),
            Err(ModelError::InvalidId("   ".to_string()))
        );
    }

    #[test]
    fn id_serializes_as_plain_string() {
        let id = EntityId::new("abc-123").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc-123\"");
    }
}
