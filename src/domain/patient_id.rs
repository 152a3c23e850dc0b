//! PatientId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Maximum accepted length for a patient id.
pub const MAX_PATIENT_ID_LEN: usize = 100;

/// A type-safe wrapper for the id of the portal user whose records are searched.
///
/// Patient ids end up in snapshot file names and storage keys, so only
/// ASCII letters, digits, `-` and `_` are accepted.
///
/// # Example
///
/// ```
/// use care_portal_search::domain::PatientId;
///
/// let id = PatientId::new("patient_123").unwrap();
/// assert_eq!(id.as_str(), "patient_123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatientId(String);

impl PatientId {
    /// Create a new PatientId, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the id is empty, longer than
    /// [`MAX_PATIENT_ID_LEN`], or contains unsupported characters.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        if id.len() > MAX_PATIENT_ID_LEN {
            return Err(ValidationError::IdTooLong(id.len()));
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::InvalidIdCharacters(id));
        }
        Ok(Self(id))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for PatientId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PatientId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PatientId::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
