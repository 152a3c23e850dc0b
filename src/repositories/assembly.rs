//! Concurrent assembly of a patient's record bundle.

use crate::domain::PatientId;
use crate::error::SourceResult;
use crate::models::{RecordCollection, SearchableRecordBundle};
use crate::observability::SearchMetrics;
use crate::repositories::traits::{CollectionFetch, RecordSource};

/// A bundle together with the collections that failed to load.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleAssembly {
    pub bundle: SearchableRecordBundle,
    pub failed: Vec<RecordCollection>,
}

impl BundleAssembly {
    /// Whether every collection loaded.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Fetch every collection for `patient` concurrently and combine them.
///
/// A collection that fails to load is logged, counted as a source failure
/// and contributes no records; the remaining collections are still
/// returned, and the failed ones are listed in [`BundleAssembly::failed`].
pub async fn assemble_bundle(
    source: &dyn RecordSource,
    patient: &PatientId,
    metrics: &SearchMetrics,
) -> BundleAssembly {
    let start = std::time::Instant::now();

    let CollectionFetch {
        appointments,
        messages,
        caregivers,
        health_trackers,
        health_reports,
        health_notes,
        payment_notifications,
    } = source.fetch_all(patient).await;

    let mut failed = Vec::new();
    let bundle = SearchableRecordBundle {
        appointments: or_empty(
            appointments,
            RecordCollection::Appointments,
            patient,
            metrics,
            &mut failed,
        ),
        messages: or_empty(
            messages,
            RecordCollection::Messages,
            patient,
            metrics,
            &mut failed,
        ),
        caregivers: or_empty(
            caregivers,
            RecordCollection::Caregivers,
            patient,
            metrics,
            &mut failed,
        ),
        health_trackers: or_empty(
            health_trackers,
            RecordCollection::HealthTrackers,
            patient,
            metrics,
            &mut failed,
        ),
        health_reports: or_empty(
            health_reports,
            RecordCollection::HealthReports,
            patient,
            metrics,
            &mut failed,
        ),
        health_notes: or_empty(
            health_notes,
            RecordCollection::HealthNotes,
            patient,
            metrics,
            &mut failed,
        ),
        payment_notifications: or_empty(
            payment_notifications,
            RecordCollection::PaymentNotifications,
            patient,
            metrics,
            &mut failed,
        ),
    };

    tracing::info!(
        patient_id = %patient,
        records = bundle.record_count(),
        failed_collections = failed.len(),
        duration_ms = start.elapsed().as_millis(),
        "Record bundle assembled"
    );

    BundleAssembly { bundle, failed }
}

fn or_empty<T>(
    result: SourceResult<Vec<T>>,
    collection: RecordCollection,
    patient: &PatientId,
    metrics: &SearchMetrics,
    failed: &mut Vec<RecordCollection>,
) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!(
            "Failed to fetch {} for patient {}: {}",
            collection,
            patient,
            e
        );
        metrics.track_source_failure(collection);
        failed.push(collection);
        Vec::new()
    })
}
