//! The snapshot of records searched in one session.

use super::fields::deserialize_null_default;
use super::{
    Appointment, Caregiver, HealthNote, HealthReport, HealthTracker, Message, PaymentNotification,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names one collection of a [`SearchableRecordBundle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordCollection {
    Appointments,
    Messages,
    Caregivers,
    HealthTrackers,
    HealthReports,
    HealthNotes,
    PaymentNotifications,
}

impl RecordCollection {
    /// Every collection, in discovery order.
    pub const ALL: [RecordCollection; 7] = [
        RecordCollection::Appointments,
        RecordCollection::Messages,
        RecordCollection::Caregivers,
        RecordCollection::HealthTrackers,
        RecordCollection::HealthReports,
        RecordCollection::HealthNotes,
        RecordCollection::PaymentNotifications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordCollection::Appointments => "appointments",
            RecordCollection::Messages => "messages",
            RecordCollection::Caregivers => "caregivers",
            RecordCollection::HealthTrackers => "health_trackers",
            RecordCollection::HealthReports => "health_reports",
            RecordCollection::HealthNotes => "health_notes",
            RecordCollection::PaymentNotifications => "payment_notifications",
        }
    }
}

impl fmt::Display for RecordCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All searchable collections for one portal user, in discovery order.
///
/// This is also the on-disk snapshot format read by
/// [`SnapshotRecordSource`](crate::repositories::SnapshotRecordSource).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchableRecordBundle {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub appointments: Vec<Appointment>,

    #[serde(deserialize_with = "deserialize_null_default")]
    pub messages: Vec<Message>,

    #[serde(deserialize_with = "deserialize_null_default")]
    pub caregivers: Vec<Caregiver>,

    #[serde(deserialize_with = "deserialize_null_default")]
    pub health_trackers: Vec<HealthTracker>,

    #[serde(deserialize_with = "deserialize_null_default")]
    pub health_reports: Vec<HealthReport>,

    #[serde(deserialize_with = "deserialize_null_default")]
    pub health_notes: Vec<HealthNote>,

    #[serde(deserialize_with = "deserialize_null_default")]
    pub payment_notifications: Vec<PaymentNotification>,
}

impl SearchableRecordBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records across all collections.
    pub fn record_count(&self) -> usize {
        self.appointments.len()
            + self.messages.len()
            + self.caregivers.len()
            + self.health_trackers.len()
            + self.health_reports.len()
            + self.health_notes.len()
            + self.payment_notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }

    /// Number of records in one collection.
    pub fn collection_len(&self, collection: RecordCollection) -> usize {
        match collection {
            RecordCollection::Appointments => self.appointments.len(),
            RecordCollection::Messages => self.messages.len(),
            RecordCollection::Caregivers => self.caregivers.len(),
            RecordCollection::HealthTrackers => self.health_trackers.len(),
            RecordCollection::HealthReports => self.health_reports.len(),
            RecordCollection::HealthNotes => self.health_notes.len(),
            RecordCollection::PaymentNotifications => self.payment_notifications.len(),
        }
    }
}
