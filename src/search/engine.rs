//! Search engine implementation.
//!
//! Scores a query against every collection in a bundle and the static page
//! directory, then merges the matches into one ranked list.

use super::pages::{StaticPage, STATIC_PAGES};
use super::result::SearchResult;
use super::scoring::calculate_match_score;
use super::searchable::Searchable;
use crate::models::SearchableRecordBundle;

/// Result cap used when the caller does not choose one.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Ranks records from a borrowed bundle against free-text queries.
///
/// The engine never mutates the bundle and keeps no state between calls, so
/// one instance can serve any number of concurrent searches.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    bundle: &'a SearchableRecordBundle,
    pages: &'a [StaticPage],
}

impl<'a> SearchEngine<'a> {
    /// Create an engine over `bundle` and the portal's static pages.
    pub fn new(bundle: &'a SearchableRecordBundle) -> Self {
        Self {
            bundle,
            pages: STATIC_PAGES,
        }
    }

    /// Create an engine with a custom page directory.
    pub fn with_pages(bundle: &'a SearchableRecordBundle, pages: &'a [StaticPage]) -> Self {
        Self { bundle, pages }
    }

    /// Search all collections for `query`.
    ///
    /// Returns at most `limit` results sorted by descending score. Results
    /// with equal scores keep discovery order: appointments, messages,
    /// caregivers, trackers, reports, notes, payments, then pages. A blank
    /// query or a zero limit yields no results.
    ///
    /// # Arguments
    /// * `query` - Free text; surrounding whitespace is ignored
    /// * `limit` - Maximum number of results to return
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        let query = query.trim();
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut results = Vec::new();
        score_collection(&self.bundle.appointments, query, &mut results);
        score_collection(&self.bundle.messages, query, &mut results);
        score_collection(&self.bundle.caregivers, query, &mut results);
        score_collection(&self.bundle.health_trackers, query, &mut results);
        score_collection(&self.bundle.health_reports, query, &mut results);
        score_collection(&self.bundle.health_notes, query, &mut results);
        score_collection(&self.bundle.payment_notifications, query, &mut results);
        score_collection(self.pages, query, &mut results);

        // Stable sort keeps discovery order for equal scores
        results.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        results.truncate(limit);

        results
    }

    /// The bundle this engine reads from.
    pub fn bundle(&self) -> &'a SearchableRecordBundle {
        self.bundle
    }
}

/// Score every record in `records`, pushing the matches onto `results`.
fn score_collection<T: Searchable>(records: &[T], query: &str, results: &mut Vec<SearchResult>) {
    for record in records {
        let score = calculate_match_score(&record.searchable_text(), query);
        if score > 0 {
            results.push(record.to_result(score));
        }
    }
}
