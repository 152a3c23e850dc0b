//! Appointment model representing a scheduled visit between a patient and a caregiver.

use super::fields::{deserialize_id, PersonRef};
use serde::{Deserialize, Serialize};

/// An appointment booked through the portal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Appointment {
    /// Unique identifier for the appointment
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// The patient attending
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<PersonRef>,

    /// The caregiver holding the appointment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caregiver: Option<PersonRef>,

    /// Kind of visit (e.g. "virtual", "physical", "home visit")
    #[serde(alias = "type", skip_serializing_if = "Option::is_none")]
    pub appointment_type: Option<String>,

    /// Scheduled date (ISO 8601 date or timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Scheduled time of day as entered at booking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Booking status (e.g. "pending", "confirmed", "cancelled")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Address or meeting link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Free-text note attached at booking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Appointment {
    /// Create an appointment with only an id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Name of the other party on the appointment.
    ///
    /// The caregiver's name is preferred; the patient's name is used when no
    /// caregiver is attached. Returns `None` when neither carries a name.
    pub fn display_name(&self) -> Option<String> {
        [self.caregiver.as_ref(), self.patient.as_ref()]
            .into_iter()
            .flatten()
            .map(PersonRef::full_name)
            .find(|name| !name.is_empty())
    }
}
