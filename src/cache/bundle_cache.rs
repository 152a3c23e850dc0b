//! Time-based cache of record bundles keyed by patient.

use crate::domain::PatientId;
use crate::models::SearchableRecordBundle;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct CacheEntry {
    bundle: Arc<SearchableRecordBundle>,
    inserted_at: Instant,
}

/// A thread-safe, cheaply cloneable cache of assembled bundles.
///
/// Entries older than the TTL are ignored by [`BundleCache::get`] and dropped
/// by [`BundleCache::purge_expired`] or the next insert. Bundles are shared
/// as `Arc`s so a hit never copies record data.
#[derive(Clone)]
pub struct BundleCache {
    entries: Arc<RwLock<HashMap<PatientId, CacheEntry>>>,
    ttl: Duration,
}

impl BundleCache {
    /// Create a cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Create a cache with a TTL given in minutes.
    pub fn from_minutes(minutes: u64) -> Self {
        Self::new(Duration::from_secs(minutes.saturating_mul(60)))
    }

    /// Store `bundle` for `patient`, replacing any previous entry.
    ///
    /// Expired entries for other patients are dropped on the way.
    pub fn insert(&self, patient: PatientId, bundle: Arc<SearchableRecordBundle>) {
        let now = Instant::now();
        let entry = CacheEntry {
            bundle,
            inserted_at: now,
        };

        if let Ok(mut entries) = self.entries.write() {
            entries.retain(|_, entry| now.duration_since(entry.inserted_at) < self.ttl);
            entries.insert(patient, entry);
        }
    }

    /// Fetch the bundle for `patient` if present and not expired.
    pub fn get(&self, patient: &PatientId) -> Option<Arc<SearchableRecordBundle>> {
        let now = Instant::now();

        let entries = self.entries.read().ok()?;
        let entry = entries.get(patient)?;
        if now.duration_since(entry.inserted_at) < self.ttl {
            Some(Arc::clone(&entry.bundle))
        } else {
            None
        }
    }

    /// Drop the entry for `patient`. Returns whether one existed.
    pub fn invalidate(&self, patient: &PatientId) -> bool {
        match self.entries.write() {
            Ok(mut entries) => entries.remove(patient).is_some(),
            Err(_) => false,
        }
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    /// Remove every expired entry, returning how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();

        match self.entries.write() {
            Ok(mut entries) => {
                let before = entries.len();
                entries.retain(|_, entry| now.duration_since(entry.inserted_at) < self.ttl);
                before - entries.len()
            }
            Err(_) => 0,
        }
    }

    /// Number of entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl std::fmt::Debug for BundleCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BundleCache")
            .field("ttl", &self.ttl)
            .field("entries", &self.len())
            .finish()
    }
}
