//! Error types for the care portal search service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The search engine itself is infallible; these errors cover the layers around it.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while loading portal records from a source.
///
/// Cloneable so one failed read can be reported for every collection it
/// would have served.
#[derive(Error, Debug, Clone)]
pub enum SourceError {
    /// Reading the underlying storage failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Failed to parse a record document
    #[error("JSON parse error: {0}")]
    Json(String),

    /// No records exist for the requested patient
    #[error("Records not found: {0}")]
    NotFound(String),

    /// The source could not serve the request right now
    #[error("Record source unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Json(err.to_string())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised by key-value store backends.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("Store I/O error: {0}")]
    Io(String),

    /// Stored value could not be encoded or decoded
    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised by the search service.
///
/// Record source failures never surface here; they degrade to empty
/// collections during bundle assembly.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The patient id failed validation
    #[error("Invalid patient id: {0}")]
    InvalidPatient(#[from] ValidationError),

    /// Reading or writing search history failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors raised by the onboarding flow.
#[derive(Error, Debug)]
pub enum OnboardingError {
    /// Step name did not match any known step
    #[error("Unknown onboarding step: {0}")]
    UnknownStep(String),

    /// Earlier steps must be completed first
    #[error("Onboarding step '{step}' is locked until '{missing}' is completed")]
    StepLocked { step: String, missing: String },

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Persisting onboarding progress failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for Results with SourceError
pub type SourceResult<T> = Result<T, SourceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with SearchError
pub type SearchServiceResult<T> = Result<T, SearchError>;

/// Convenience type alias for Results with OnboardingError
pub type OnboardingResult<T> = Result<T, OnboardingError>;
