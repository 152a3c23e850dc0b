use crate::domain::PatientId;
use crate::error::{SourceError, SourceResult};
use crate::models::*;
use crate::repositories::traits::{CollectionFetch, RecordSource};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Record source backed by per-patient JSON snapshots.
///
/// Each patient's records live in `<dir>/<patient_id>.json`, a document
/// with the seven collections in camelCase. The file is read on the
/// blocking thread pool; [`RecordSource::fetch_all`] reads it once for all
/// collections, while each single-collection call reads it again.
#[derive(Debug, Clone)]
pub struct SnapshotRecordSource {
    dir: PathBuf,
}

impl SnapshotRecordSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the snapshot file for `patient`.
    pub fn snapshot_path(&self, patient: &PatientId) -> PathBuf {
        self.dir.join(format!("{}.json", patient.as_str()))
    }

    /// Read and parse the whole snapshot for `patient`.
    pub async fn load(&self, patient: &PatientId) -> SourceResult<SearchableRecordBundle> {
        let path = self.snapshot_path(patient);
        let patient_id = patient.as_str().to_string();

        tokio::task::spawn_blocking(move || -> SourceResult<SearchableRecordBundle> {
            let contents = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
                ErrorKind::NotFound => SourceError::NotFound(patient_id),
                _ => SourceError::Io(format!("{}: {}", path.display(), e)),
            })?;
            Ok(serde_json::from_str(&contents)?)
        })
        .await
        .map_err(|e| SourceError::Io(format!("Task join error: {}", e)))?
    }
}

#[async_trait]
impl RecordSource for SnapshotRecordSource {
    async fn appointments(&self, patient: &PatientId) -> SourceResult<Vec<Appointment>> {
        Ok(self.load(patient).await?.appointments)
    }

    async fn messages(&self, patient: &PatientId) -> SourceResult<Vec<Message>> {
        Ok(self.load(patient).await?.messages)
    }

    async fn caregivers(&self, patient: &PatientId) -> SourceResult<Vec<Caregiver>> {
        Ok(self.load(patient).await?.caregivers)
    }

    async fn health_trackers(&self, patient: &PatientId) -> SourceResult<Vec<HealthTracker>> {
        Ok(self.load(patient).await?.health_trackers)
    }

    async fn health_reports(&self, patient: &PatientId) -> SourceResult<Vec<HealthReport>> {
        Ok(self.load(patient).await?.health_reports)
    }

    async fn health_notes(&self, patient: &PatientId) -> SourceResult<Vec<HealthNote>> {
        Ok(self.load(patient).await?.health_notes)
    }

    async fn payment_notifications(
        &self,
        patient: &PatientId,
    ) -> SourceResult<Vec<PaymentNotification>> {
        Ok(self.load(patient).await?.payment_notifications)
    }

    async fn fetch_all(&self, patient: &PatientId) -> CollectionFetch {
        match self.load(patient).await {
            Ok(bundle) => CollectionFetch::from_bundle(bundle),
            Err(e) => CollectionFetch::failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(id: &str) -> PatientId {
        PatientId::new(id).unwrap()
    }

    #[tokio::test]
    async fn test_reads_collections_from_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("p-1.json"),
            r#"{
                "caregivers": [{"id": 7, "firstName": "Grace", "lastName": "Eze"}],
                "paymentNotifications": [{"id": "9", "reference": "REF1", "amount": 5000}]
            }"#,
        )
        .unwrap();

        let source = SnapshotRecordSource::new(dir.path());
        let caregivers = source.caregivers(&patient("p-1")).await.unwrap();
        assert_eq!(caregivers.len(), 1);
        assert_eq!(caregivers[0].id, "7");

        let payments = source.payment_notifications(&patient("p-1")).await.unwrap();
        assert_eq!(payments[0].amount.as_deref(), Some("5000"));

        assert!(source.messages(&patient("p-1")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_snapshot_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = SnapshotRecordSource::new(dir.path());

        match source.appointments(&patient("nobody")).await {
            Err(SourceError::NotFound(id)) => assert_eq!(id, "nobody"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_snapshot_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("p-2.json"), "{ not json").unwrap();
        let source = SnapshotRecordSource::new(dir.path());

        assert!(matches!(
            source.health_notes(&patient("p-2")).await,
            Err(SourceError::Json(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_all_reads_every_collection() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("p-3.json"),
            r#"{
                "caregivers": [{"id": 7, "firstName": "Grace", "lastName": "Eze"}],
                "healthNotes": [{"id": 3, "title": "Allergies"}]
            }"#,
        )
        .unwrap();
        let source = SnapshotRecordSource::new(dir.path());

        let fetch = source.fetch_all(&patient("p-3")).await;
        assert_eq!(fetch.caregivers.unwrap().len(), 1);
        assert_eq!(fetch.health_notes.unwrap().len(), 1);
        assert!(fetch.appointments.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_missing_snapshot_fails_every_collection() {
        let dir = tempfile::tempdir().unwrap();
        let source = SnapshotRecordSource::new(dir.path());

        let fetch = source.fetch_all(&patient("nobody")).await;
        assert!(matches!(fetch.appointments, Err(SourceError::NotFound(_))));
        assert!(matches!(fetch.payment_notifications, Err(SourceError::NotFound(_))));
    }

    #[test]
    fn test_snapshot_path() {
        let source = SnapshotRecordSource::new("/data/snapshots");
        assert_eq!(
            source.snapshot_path(&patient("abc_1")),
            PathBuf::from("/data/snapshots/abc_1.json")
        );
    }
}
