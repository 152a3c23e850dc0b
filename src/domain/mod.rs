//! Domain value objects and types.
//!
//! Type-safe wrappers for portal identifiers. Validation happens at
//! construction time so that invalid ids never reach a record source or
//! a storage key.

pub mod errors;
pub mod patient_id;

pub use errors::ValidationError;
pub use patient_id::PatientId;
