//! Most-recent-first history of search queries.

use serde::{Deserialize, Serialize};

/// A capped, de-duplicated list of recent queries, newest first.
///
/// Only the query list is serialized; the capacity comes from configuration
/// and is re-applied whenever a stored list is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentSearches {
    queries: Vec<String>,
    #[serde(skip, default = "RecentSearches::default_capacity")]
    capacity: usize,
}

impl RecentSearches {
    /// Number of queries kept when no capacity is configured.
    pub const DEFAULT_CAPACITY: usize = 5;

    fn default_capacity() -> usize {
        Self::DEFAULT_CAPACITY
    }

    /// Create an empty history holding at most `capacity` queries.
    pub fn new(capacity: usize) -> Self {
        Self {
            queries: Vec::new(),
            capacity,
        }
    }

    /// Rebuild a history from stored queries (newest first).
    ///
    /// Blank entries and later duplicates are dropped, then the list is cut
    /// to `capacity`.
    pub fn from_queries(queries: Vec<String>, capacity: usize) -> Self {
        let mut history = Self::new(capacity);
        for query in queries {
            let query = query.trim();
            if query.is_empty() || history.position_of(query).is_some() {
                continue;
            }
            history.queries.push(query.to_string());
        }
        history.queries.truncate(capacity);
        history
    }

    /// Record a query as the newest entry.
    ///
    /// The query is trimmed. An existing entry equal to it (ignoring case)
    /// moves to the front instead of being duplicated. Returns `false` for a
    /// blank query, which is not recorded.
    pub fn record(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() || self.capacity == 0 {
            return false;
        }

        if let Some(index) = self.position_of(query) {
            self.queries.remove(index);
        }
        self.queries.insert(0, query.to_string());
        self.queries.truncate(self.capacity);
        true
    }

    /// Queries, newest first.
    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    pub fn into_queries(self) -> Vec<String> {
        self.queries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn clear(&mut self) {
        self.queries.clear();
    }

    fn position_of(&self, query: &str) -> Option<usize> {
        let needle = query.to_lowercase();
        self.queries.iter().position(|q| q.to_lowercase() == needle)
    }
}

impl Default for RecentSearches {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
