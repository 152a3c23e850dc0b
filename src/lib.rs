//! Care Portal Search - global search over a patient's care portal records,
//! served through the Model Context Protocol.
//!
//! A patient's appointments, messages, caregivers, health trackers, health
//! reports, health notes and payment notifications are assembled into one
//! bundle, scored against a free-text query alongside the portal's static
//! pages, and returned as a single ranked list of navigable results.
//!
//! # Architecture
//!
//! - **models**: Record types and the per-patient bundle
//! - **search**: Scoring, per-kind result mapping, the engine and recent searches
//! - **repositories**: Record sources and concurrent bundle assembly
//! - **cache**: Time-based bundle cache
//! - **storage**: Key-value persistence for per-patient state
//! - **onboarding**: Registration step state machine
//! - **services**: Search and onboarding request paths
//! - **server**: MCP tool surface over stdio
//! - **config**, **error**, **observability**: Ambient plumbing

pub mod cache;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod onboarding;
pub mod repositories;
pub mod search;
pub mod server;
pub mod services;
pub mod storage;

pub use cache::BundleCache;
pub use config::Config;
pub use domain::{PatientId, ValidationError};
pub use error::{ConfigError, OnboardingError, SearchError, SourceError, StoreError};
pub use models::SearchableRecordBundle;
pub use observability::SearchMetrics;
pub use onboarding::{OnboardingState, OnboardingStatus, OnboardingStep};
pub use repositories::{RecordSource, SnapshotRecordSource};
pub use search::{calculate_match_score, SearchEngine, SearchResult, SearchResultType};
pub use server::PortalSearchServer;
pub use services::{
    OnboardingService, OnboardingServiceImpl, PortalSearchService, SearchResponse, SearchService,
    SearchSettings,
};
pub use storage::{InMemoryStore, JsonFileStore, KeyValueStore};
