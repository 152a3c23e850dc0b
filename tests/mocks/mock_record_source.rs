use async_trait::async_trait;
use care_portal_search::error::{SourceError, SourceResult};
use care_portal_search::models::*;
use care_portal_search::repositories::RecordSource;
use care_portal_search::PatientId;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock record source for testing.
///
/// Serves the same bundle to every patient, can be told to fail individual
/// collections, and counts calls per method for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockRecordSource {
    bundle: Arc<Mutex<SearchableRecordBundle>>,
    failing: Arc<Mutex<HashSet<RecordCollection>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockRecordSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bundle(bundle: SearchableRecordBundle) -> Self {
        let source = Self::new();
        source.set_bundle(bundle);
        source
    }

    /// Replace the records served from now on.
    pub fn set_bundle(&self, bundle: SearchableRecordBundle) {
        *self.bundle.lock().unwrap() = bundle;
    }

    /// Make every fetch of `collection` fail.
    pub fn fail_collection(&self, collection: RecordCollection) {
        self.failing.lock().unwrap().insert(collection);
    }

    /// Let fetches of `collection` succeed again.
    pub fn recover_collection(&self, collection: RecordCollection) {
        self.failing.lock().unwrap().remove(&collection);
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn serve<T>(
        &self,
        collection: RecordCollection,
        select: impl FnOnce(&SearchableRecordBundle) -> Vec<T>,
    ) -> SourceResult<Vec<T>> {
        {
            let mut counts = self.call_counts.lock().unwrap();
            *counts.entry(collection.as_str().to_string()).or_insert(0) += 1;
        }

        if self.failing.lock().unwrap().contains(&collection) {
            return Err(SourceError::Unavailable(format!(
                "{} backend is down",
                collection
            )));
        }

        let bundle = self.bundle.lock().unwrap();
        Ok(select(&bundle))
    }
}

#[async_trait]
impl RecordSource for MockRecordSource {
    async fn appointments(&self, _patient: &PatientId) -> SourceResult<Vec<Appointment>> {
        self.serve(RecordCollection::Appointments, |b| b.appointments.clone())
    }

    async fn messages(&self, _patient: &PatientId) -> SourceResult<Vec<Message>> {
        self.serve(RecordCollection::Messages, |b| b.messages.clone())
    }

    async fn caregivers(&self, _patient: &PatientId) -> SourceResult<Vec<Caregiver>> {
        self.serve(RecordCollection::Caregivers, |b| b.caregivers.clone())
    }

    async fn health_trackers(&self, _patient: &PatientId) -> SourceResult<Vec<HealthTracker>> {
        self.serve(RecordCollection::HealthTrackers, |b| b.health_trackers.clone())
    }

    async fn health_reports(&self, _patient: &PatientId) -> SourceResult<Vec<HealthReport>> {
        self.serve(RecordCollection::HealthReports, |b| b.health_reports.clone())
    }

    async fn health_notes(&self, _patient: &PatientId) -> SourceResult<Vec<HealthNote>> {
        self.serve(RecordCollection::HealthNotes, |b| b.health_notes.clone())
    }

    async fn payment_notifications(
        &self,
        _patient: &PatientId,
    ) -> SourceResult<Vec<PaymentNotification>> {
        self.serve(RecordCollection::PaymentNotifications, |b| {
            b.payment_notifications.clone()
        })
    }
}
