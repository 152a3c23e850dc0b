use crate::domain::PatientId;
use crate::error::{SourceError, SourceResult};
use crate::models::*;
use async_trait::async_trait;

/// Source of the records a patient can search.
///
/// Each collection is fetched separately so implementations can map them
/// onto independent backend calls, and so one failing collection does not
/// take the others down with it.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn appointments(&self, patient: &PatientId) -> SourceResult<Vec<Appointment>>;

    async fn messages(&self, patient: &PatientId) -> SourceResult<Vec<Message>>;

    /// Caregivers the patient has access to.
    async fn caregivers(&self, patient: &PatientId) -> SourceResult<Vec<Caregiver>>;

    /// Vitals readings recorded by the patient.
    async fn health_trackers(&self, patient: &PatientId) -> SourceResult<Vec<HealthTracker>>;

    async fn health_reports(&self, patient: &PatientId) -> SourceResult<Vec<HealthReport>>;

    async fn health_notes(&self, patient: &PatientId) -> SourceResult<Vec<HealthNote>>;

    /// Billing notifications for subscription payments.
    async fn payment_notifications(
        &self,
        patient: &PatientId,
    ) -> SourceResult<Vec<PaymentNotification>>;

    /// Fetch all seven collections at once.
    ///
    /// The default runs the per-collection calls concurrently. Sources that
    /// hold every collection in one document override this to read it once.
    async fn fetch_all(&self, patient: &PatientId) -> CollectionFetch {
        let (
            appointments,
            messages,
            caregivers,
            health_trackers,
            health_reports,
            health_notes,
            payment_notifications,
        ) = futures::join!(
            self.appointments(patient),
            self.messages(patient),
            self.caregivers(patient),
            self.health_trackers(patient),
            self.health_reports(patient),
            self.health_notes(patient),
            self.payment_notifications(patient),
        );

        CollectionFetch {
            appointments,
            messages,
            caregivers,
            health_trackers,
            health_reports,
            health_notes,
            payment_notifications,
        }
    }
}

/// Per-collection outcome of [`RecordSource::fetch_all`].
#[derive(Debug)]
pub struct CollectionFetch {
    pub appointments: SourceResult<Vec<Appointment>>,
    pub messages: SourceResult<Vec<Message>>,
    pub caregivers: SourceResult<Vec<Caregiver>>,
    pub health_trackers: SourceResult<Vec<HealthTracker>>,
    pub health_reports: SourceResult<Vec<HealthReport>>,
    pub health_notes: SourceResult<Vec<HealthNote>>,
    pub payment_notifications: SourceResult<Vec<PaymentNotification>>,
}

impl CollectionFetch {
    /// Every collection loaded from one bundle.
    pub fn from_bundle(bundle: SearchableRecordBundle) -> Self {
        Self {
            appointments: Ok(bundle.appointments),
            messages: Ok(bundle.messages),
            caregivers: Ok(bundle.caregivers),
            health_trackers: Ok(bundle.health_trackers),
            health_reports: Ok(bundle.health_reports),
            health_notes: Ok(bundle.health_notes),
            payment_notifications: Ok(bundle.payment_notifications),
        }
    }

    /// Every collection failed with `error`.
    pub fn failed(error: SourceError) -> Self {
        Self {
            appointments: Err(error.clone()),
            messages: Err(error.clone()),
            caregivers: Err(error.clone()),
            health_trackers: Err(error.clone()),
            health_reports: Err(error.clone()),
            health_notes: Err(error.clone()),
            payment_notifications: Err(error),
        }
    }
}
