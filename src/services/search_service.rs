//! Search service layer.
//!
//! Resolves a patient's record bundle (from cache or the record source),
//! ranks it against the query and keeps the patient's recent-search history.

use crate::cache::BundleCache;
use crate::config::Config;
use crate::domain::PatientId;
use crate::error::{SearchServiceResult, StoreResult};
use crate::models::SearchableRecordBundle;
use crate::observability::{SearchMetrics, Timer};
use crate::repositories::{assemble_bundle, RecordSource};
use crate::search::{RecentSearches, SearchEngine, SearchResult, DEFAULT_SEARCH_LIMIT};
use crate::storage::KeyValueStore;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Outcome of one search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query as submitted, trimmed
    pub query: String,
    pub result_count: usize,
    /// Whether the record bundle came from the cache
    pub from_cache: bool,
    pub results: Vec<SearchResult>,
}

impl SearchResponse {
    fn empty(query: &str) -> Self {
        Self {
            query: query.to_string(),
            result_count: 0,
            from_cache: false,
            results: Vec::new(),
        }
    }
}

/// Search service trait for business operations.
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Search everything `patient_id` can see.
    ///
    /// `limit` defaults to the configured limit. A blank query or a zero
    /// limit returns an empty response without loading any records.
    async fn search(
        &self,
        patient_id: &str,
        query: &str,
        limit: Option<usize>,
    ) -> SearchServiceResult<SearchResponse>;

    /// Recent queries for `patient_id`, newest first.
    async fn recent_searches(&self, patient_id: &str) -> SearchServiceResult<Vec<String>>;

    async fn clear_recent_searches(&self, patient_id: &str) -> SearchServiceResult<()>;

    /// Drop the cached bundle so the next search reloads records.
    ///
    /// Returns whether a bundle was cached.
    async fn invalidate(&self, patient_id: &str) -> SearchServiceResult<bool>;
}

/// Tunables for [`PortalSearchService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    pub cache_ttl: Duration,
    pub default_limit: usize,
    pub recent_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(5 * 60),
            default_limit: DEFAULT_SEARCH_LIMIT,
            recent_limit: RecentSearches::DEFAULT_CAPACITY,
        }
    }
}

impl From<&Config> for SearchSettings {
    fn from(config: &Config) -> Self {
        Self {
            cache_ttl: Duration::from_secs(config.cache_ttl_minutes.saturating_mul(60)),
            default_limit: config.default_search_limit,
            recent_limit: config.recent_search_limit,
        }
    }
}

/// Default implementation of SearchService.
pub struct PortalSearchService {
    source: Arc<dyn RecordSource>,
    store: Arc<dyn KeyValueStore>,
    cache: BundleCache,
    metrics: SearchMetrics,
    settings: SearchSettings,
    // Serializes read-modify-write of recent-search histories
    history_lock: Mutex<()>,
}

impl PortalSearchService {
    pub fn new(
        source: Arc<dyn RecordSource>,
        store: Arc<dyn KeyValueStore>,
        settings: SearchSettings,
    ) -> Self {
        Self {
            source,
            store,
            cache: BundleCache::new(settings.cache_ttl),
            metrics: SearchMetrics::new(),
            settings,
            history_lock: Mutex::new(()),
        }
    }

    /// Replace the metrics sink, e.g. to share counters with the caller.
    pub fn with_metrics(mut self, metrics: SearchMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &SearchMetrics {
        &self.metrics
    }

    pub fn settings(&self) -> SearchSettings {
        self.settings
    }

    fn history_key(patient: &PatientId) -> String {
        format!("recent-searches:{}", patient)
    }

    /// Cached bundle for `patient`, assembling it on a miss.
    ///
    /// A bundle with failed collections is served but not cached.
    async fn bundle_for(&self, patient: &PatientId) -> (Arc<SearchableRecordBundle>, bool) {
        if let Some(bundle) = self.cache.get(patient) {
            tracing::debug!(patient_id = %patient, "Using cached record bundle");
            self.metrics.track_cache_access(true);
            return (bundle, true);
        }
        self.metrics.track_cache_access(false);

        let assembly = assemble_bundle(self.source.as_ref(), patient, &self.metrics).await;
        let complete = assembly.is_complete();
        let bundle = Arc::new(assembly.bundle);
        if complete {
            self.cache.insert(patient.clone(), Arc::clone(&bundle));
        } else {
            tracing::debug!(
                patient_id = %patient,
                failed_collections = assembly.failed.len(),
                "Not caching incomplete record bundle"
            );
        }
        (bundle, false)
    }

    async fn load_history(&self, patient: &PatientId) -> StoreResult<RecentSearches> {
        let capacity = self.settings.recent_limit;
        match self.store.get(&Self::history_key(patient)).await? {
            Some(json) => {
                let queries: Vec<String> = serde_json::from_str(&json)?;
                Ok(RecentSearches::from_queries(queries, capacity))
            }
            None => Ok(RecentSearches::new(capacity)),
        }
    }

    async fn record_query(&self, patient: &PatientId, query: &str) -> StoreResult<()> {
        let _guard = self.history_lock.lock().await;

        let mut history = self.load_history(patient).await?;
        if history.record(query) {
            let json = serde_json::to_string(&history)?;
            self.store.set(&Self::history_key(patient), json).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl SearchService for PortalSearchService {
    async fn search(
        &self,
        patient_id: &str,
        query: &str,
        limit: Option<usize>,
    ) -> SearchServiceResult<SearchResponse> {
        let patient = PatientId::new(patient_id)?;
        let query = query.trim();
        let limit = limit.unwrap_or(self.settings.default_limit);

        if query.is_empty() || limit == 0 {
            return Ok(SearchResponse::empty(query));
        }

        let timer = Timer::new("search");
        let (bundle, from_cache) = self.bundle_for(&patient).await;
        let results = SearchEngine::new(&bundle).search(query, limit);

        if let Err(e) = self.record_query(&patient, query).await {
            tracing::warn!("Failed to record recent search for patient {}: {}", patient, e);
        }

        self.metrics
            .track_search(timer.finish(), results.len(), from_cache);

        Ok(SearchResponse {
            query: query.to_string(),
            result_count: results.len(),
            from_cache,
            results,
        })
    }

    async fn recent_searches(&self, patient_id: &str) -> SearchServiceResult<Vec<String>> {
        let patient = PatientId::new(patient_id)?;
        Ok(self.load_history(&patient).await?.into_queries())
    }

    async fn clear_recent_searches(&self, patient_id: &str) -> SearchServiceResult<()> {
        let patient = PatientId::new(patient_id)?;
        let _guard = self.history_lock.lock().await;
        self.store.remove(&Self::history_key(&patient)).await?;
        Ok(())
    }

    async fn invalidate(&self, patient_id: &str) -> SearchServiceResult<bool> {
        let patient = PatientId::new(patient_id)?;
        let removed = self.cache.invalidate(&patient);
        tracing::debug!(patient_id = %patient, removed, "Record bundle invalidated");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SearchError, SourceError, SourceResult};
    use crate::models::*;
    use crate::storage::InMemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves a fixed caregiver list and counts caregiver fetches.
    #[derive(Default)]
    struct CountingSource {
        caregiver_calls: AtomicUsize,
    }

    #[async_trait]
    impl RecordSource for CountingSource {
        async fn appointments(&self, _: &PatientId) -> SourceResult<Vec<Appointment>> {
            Ok(Vec::new())
        }
        async fn messages(&self, _: &PatientId) -> SourceResult<Vec<Message>> {
            Ok(Vec::new())
        }
        async fn caregivers(&self, _: &PatientId) -> SourceResult<Vec<Caregiver>> {
            self.caregiver_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Caregiver::new("1", "Jane", "Doe")])
        }
        async fn health_trackers(&self, _: &PatientId) -> SourceResult<Vec<HealthTracker>> {
            Ok(Vec::new())
        }
        async fn health_reports(&self, _: &PatientId) -> SourceResult<Vec<HealthReport>> {
            Ok(Vec::new())
        }
        async fn health_notes(&self, _: &PatientId) -> SourceResult<Vec<HealthNote>> {
            Ok(Vec::new())
        }
        async fn payment_notifications(
            &self,
            _: &PatientId,
        ) -> SourceResult<Vec<PaymentNotification>> {
            Ok(Vec::new())
        }
    }

    /// Fails the first caregiver fetch, then serves one caregiver.
    #[derive(Default)]
    struct FlakyCaregiverSource {
        caregiver_calls: AtomicUsize,
    }

    #[async_trait]
    impl RecordSource for FlakyCaregiverSource {
        async fn appointments(&self, _: &PatientId) -> SourceResult<Vec<Appointment>> {
            Ok(Vec::new())
        }
        async fn messages(&self, _: &PatientId) -> SourceResult<Vec<Message>> {
            Ok(Vec::new())
        }
        async fn caregivers(&self, _: &PatientId) -> SourceResult<Vec<Caregiver>> {
            if self.caregiver_calls.fetch_add(1, Ordering::SeqCst) == 0 {
                return Err(SourceError::Unavailable("timeout".to_string()));
            }
            Ok(vec![Caregiver::new("1", "Jane", "Doe")])
        }
        async fn health_trackers(&self, _: &PatientId) -> SourceResult<Vec<HealthTracker>> {
            Ok(Vec::new())
        }
        async fn health_reports(&self, _: &PatientId) -> SourceResult<Vec<HealthReport>> {
            Ok(Vec::new())
        }
        async fn health_notes(&self, _: &PatientId) -> SourceResult<Vec<HealthNote>> {
            Ok(Vec::new())
        }
        async fn payment_notifications(
            &self,
            _: &PatientId,
        ) -> SourceResult<Vec<PaymentNotification>> {
            Ok(Vec::new())
        }
    }

    fn service() -> (Arc<CountingSource>, PortalSearchService) {
        let source = Arc::new(CountingSource::default());
        let service = PortalSearchService::new(
            source.clone(),
            Arc::new(InMemoryStore::new()),
            SearchSettings::default(),
        );
        (source, service)
    }

    #[tokio::test]
    async fn test_second_search_uses_cache() {
        let (source, service) = service();

        let first = service.search("p1", "jane", None).await.unwrap();
        let second = service.search("p1", "doe", None).await.unwrap();

        assert!(!first.from_cache);
        assert!(second.from_cache);
        assert_eq!(first.results[0].id, "caregiver-1");
        assert_eq!(source.caregiver_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_blank_query_skips_source() {
        let (source, service) = service();

        let response = service.search("p1", "   ", None).await.unwrap();
        assert_eq!(response.result_count, 0);
        assert_eq!(source.caregiver_calls.load(Ordering::SeqCst), 0);
        assert!(service.recent_searches("p1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_patient_is_rejected() {
        let (_, service) = service();

        assert!(matches!(
            service.search("", "jane", None).await,
            Err(SearchError::InvalidPatient(_))
        ));
    }

    #[tokio::test]
    async fn test_invalidate_forces_reload() {
        let (source, service) = service();
        service.search("p1", "jane", None).await.unwrap();

        assert!(service.invalidate("p1").await.unwrap());
        let response = service.search("p1", "jane", None).await.unwrap();

        assert!(!response.from_cache);
        assert_eq!(source.caregiver_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_queries_are_recorded() {
        let (_, service) = service();
        service.search("p1", " jane ", None).await.unwrap();
        service.search("p1", "billing", None).await.unwrap();

        assert_eq!(
            service.recent_searches("p1").await.unwrap(),
            vec!["billing".to_string(), "jane".to_string()]
        );

        service.clear_recent_searches("p1").await.unwrap();
        assert!(service.recent_searches("p1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_incomplete_bundle_is_not_cached() {
        let source = Arc::new(FlakyCaregiverSource::default());
        let service = PortalSearchService::new(
            source.clone(),
            Arc::new(InMemoryStore::new()),
            SearchSettings::default(),
        );

        let first = service.search("p1", "jane", None).await.unwrap();
        assert_eq!(first.result_count, 0);

        let second = service.search("p1", "jane", None).await.unwrap();
        assert!(!second.from_cache);
        assert_eq!(second.results[0].id, "caregiver-1");

        let third = service.search("p1", "jane", None).await.unwrap();
        assert!(third.from_cache);
        assert_eq!(source.caregiver_calls.load(Ordering::SeqCst), 2);
        assert_eq!(service.metrics().source_failures_total(), 1);
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let config = Config {
            cache_ttl_minutes: u64::MAX,
            ..Config::default()
        };
        let settings = SearchSettings::from(&config);
        assert_eq!(settings.cache_ttl, Duration::from_secs(u64::MAX));
    }
}
