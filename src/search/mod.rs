//! Cross-collection search for the care portal.
//!
//! The [`SearchEngine`] scores a free-text query against every collection in
//! a [`SearchableRecordBundle`](crate::models::SearchableRecordBundle) plus the
//! portal's static page directory, and returns one ranked, capped list.

pub mod engine;
pub mod pages;
pub mod recent;
pub mod result;
pub mod scoring;
pub mod searchable;
pub mod text;

pub use engine::{SearchEngine, DEFAULT_SEARCH_LIMIT};
pub use pages::{StaticPage, STATIC_PAGES};
pub use recent::RecentSearches;
pub use result::{ResultMetadata, SearchResult, SearchResultType};
pub use scoring::calculate_match_score;
pub use searchable::Searchable;
