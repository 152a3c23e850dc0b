//! Counters for searches, bundle cache usage and source failures.

use crate::models::RecordCollection;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared search counters. Clones observe the same totals.
#[derive(Debug, Clone)]
pub struct SearchMetrics {
    searches_total: Arc<AtomicU64>,
    results_returned_total: Arc<AtomicU64>,
    cache_hits_total: Arc<AtomicU64>,
    cache_misses_total: Arc<AtomicU64>,
    source_failures_total: Arc<AtomicU64>,
}

impl SearchMetrics {
    pub fn new() -> Self {
        Self {
            searches_total: Arc::new(AtomicU64::new(0)),
            results_returned_total: Arc::new(AtomicU64::new(0)),
            cache_hits_total: Arc::new(AtomicU64::new(0)),
            cache_misses_total: Arc::new(AtomicU64::new(0)),
            source_failures_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a completed search.
    pub fn track_search(&self, duration_ms: u128, result_count: usize, from_cache: bool) {
        self.searches_total.fetch_add(1, Ordering::Relaxed);
        self.results_returned_total
            .fetch_add(result_count as u64, Ordering::Relaxed);

        tracing::info!(
            duration_ms = duration_ms,
            result_count = result_count,
            from_cache = from_cache,
            "Search completed"
        );
    }

    /// Track a bundle cache lookup.
    pub fn track_cache_access(&self, hit: bool) {
        if hit {
            self.cache_hits_total.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("Bundle cache hit");
        } else {
            self.cache_misses_total.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("Bundle cache miss");
        }
    }

    /// Track a collection that could not be fetched.
    pub fn track_source_failure(&self, collection: RecordCollection) {
        self.source_failures_total.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(collection = %collection, "Source failure recorded");
    }

    pub fn searches_total(&self) -> u64 {
        self.searches_total.load(Ordering::Relaxed)
    }

    pub fn results_returned_total(&self) -> u64 {
        self.results_returned_total.load(Ordering::Relaxed)
    }

    pub fn cache_hits_total(&self) -> u64 {
        self.cache_hits_total.load(Ordering::Relaxed)
    }

    pub fn cache_misses_total(&self) -> u64 {
        self.cache_misses_total.load(Ordering::Relaxed)
    }

    pub fn source_failures_total(&self) -> u64 {
        self.source_failures_total.load(Ordering::Relaxed)
    }

    /// Cache hit rate between 0.0 and 1.0.
    pub fn cache_hit_rate(&self) -> f64 {
        let hits = self.cache_hits_total() as f64;
        let total = (self.cache_hits_total() + self.cache_misses_total()) as f64;

        if total == 0.0 {
            0.0
        } else {
            hits / total
        }
    }

    /// Human-readable summary of all counters.
    pub fn summary(&self) -> String {
        format!(
            "Search Metrics:\n\
             Searches: {}\n\
             Results Returned: {}\n\
             Cache Hits: {}\n\
             Cache Misses: {}\n\
             Cache Hit Rate: {:.2}%\n\
             Source Failures: {}",
            self.searches_total(),
            self.results_returned_total(),
            self.cache_hits_total(),
            self.cache_misses_total(),
            self.cache_hit_rate() * 100.0,
            self.source_failures_total(),
        )
    }
}

impl Default for SearchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Measures how long an operation takes.
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Stop the timer and return the elapsed milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        tracing::debug!(
            operation = self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );

        duration_ms
    }
}
