use super::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Contentful resource IDs are at most 64 characters long.
const MAX_ID_LENGTH: usize = 64;

/// Strong typing for IDs with phantom types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

/// Names the resource an ID points at, for error messages.
pub trait IdKind {
    const KIND: &'static str;
}

/// Marker types for different ID kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpaceMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryMarker;

impl IdKind for SpaceMarker {
    const KIND: &'static str = "space";
}

impl IdKind for EntryMarker {
    const KIND: &'static str = "entry";
}

/// Type aliases for specific ID types
pub type SpaceId = Id<SpaceMarker>;
pub type EntryId = Id<EntryMarker>;

impl<T: IdKind> Id<T> {
    /// Parse a Contentful resource ID, rejecting anything the API would refuse.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = normalize_resource_id(input, T::KIND)?;
        Ok(Self::from_normalized(normalized))
    }
}

impl<T> Id<T> {
    /// Create an ID from an already normalized string (internal use)
    pub(crate) fn from_normalized(value: String) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Get the ID as a string reference
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_normalized(value))
    }
}

/// Trims and validates a resource ID against the Contentful ID alphabet.
fn normalize_resource_id(input: &str, kind: &'static str) -> Result<String, ValidationError> {
    lazy_static::lazy_static! {
        static ref RESOURCE_ID_REGEX: Regex = Regex::new(r"^[A-Za-z0-9._-]+$")
            .expect("Failed to compile resource ID regex - this is a bug in the code");
    }

    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::InvalidId {
            kind,
            reason: "ID cannot be empty".to_string(),
        });
    }

    if input.len() > MAX_ID_LENGTH {
        return Err(ValidationError::InvalidId {
            kind,
            reason: format!(
                "ID is {} characters long, at most {} allowed",
                input.len(),
                MAX_ID_LENGTH
            ),
        });
    }

    if !RESOURCE_ID_REGEX.is_match(input) {
        return Err(ValidationError::InvalidId {
            kind,
            reason: format!("'{}' contains characters outside [A-Za-z0-9._-]", input),
        });
    }

    Ok(input.to_string())
}
