//! Data models for the records a portal user can search.
//!
//! Each model mirrors the JSON shape returned by the portal backend. Every
//! optional field may be absent or `null`, ids may arrive as strings or
//! numbers, and none of that is allowed to fail deserialization.

pub mod appointment;
pub mod bundle;
pub mod caregiver;
pub mod fields;
pub mod health;
pub mod message;
pub mod payment;

pub use appointment::Appointment;
pub use bundle::{RecordCollection, SearchableRecordBundle};
pub use caregiver::Caregiver;
pub use fields::PersonRef;
pub use health::{HealthNote, HealthReport, HealthTracker, TrackerMetric};
pub use message::Message;
pub use payment::PaymentNotification;
