//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Generates a UUID-backed identifier newtype with the standard
/// constructors, `Display` and `FromStr`.
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for a journal entry (a recorded prayer).
    EntryId
);

uuid_id!(
    /// Unique identifier for an entry category.
    CategoryId
);

uuid_id!(
    /// Unique identifier for one run through a panel set.
    SessionId
);

/// Identifier of a panel set.
///
/// Panel sets are authored content, so their ids are human-chosen slugs
/// (`classic`, `evening`) rather than UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PanelSetId(String);

impl PanelSetId {
    /// Creates a panel set id, rejecting blank values.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("panel_set_id"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PanelSetId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PanelSetId> for String {
    fn from(id: PanelSetId) -> Self {
        id.0
    }
}

impl fmt::Display for PanelSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PanelSetId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_id_generates_unique_values() {
        let a = EntryId::new();
        let b = EntryId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn entry_id_roundtrips_through_string() {
        let id = EntryId::new();
        let parsed: EntryId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn entry_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<EntryId>().is_err());
    }

    #[test]
    fn category_id_serializes_as_bare_uuid() {
        let uuid = Uuid::new_v4();
        let id = CategoryId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }

    #[test]
    fn panel_set_id_trims_whitespace() {
        let id = PanelSetId::new("  classic ").unwrap();
        assert_eq!(id.as_str(), "classic");
    }

    #[test]
    fn panel_set_id_rejects_blank() {
        assert!(PanelSetId::new("   ").is_err());
        assert!(serde_json::from_str::<PanelSetId>("\"\"").is_err());
    }

    #[test]
    fn panel_set_id_deserializes_from_string() {
        let id: PanelSetId = serde_json::from_str("\"evening\"").unwrap();
        assert_eq!(id.to_string(), "evening");
    }
}
