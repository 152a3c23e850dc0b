//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The provided ID exceeds the maximum length.
    IdTooLong(usize),

    /// The provided ID contains characters outside `[A-Za-z0-9_-]`.
    InvalidIdCharacters(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::IdTooLong(len) => write!(f, "ID too long ({} characters, max 100)", len),
            Self::InvalidIdCharacters(id) => write!(f, "ID contains invalid characters: {}", id),
        }
    }
}

impl std::error::Error for ValidationError {}
