//! Application service layer.
//!
//! Services own the request paths the MCP handlers call into: validation,
//! caching, persistence of per-patient state, and metrics.

mod onboarding_service;
mod search_service;

pub use onboarding_service::{OnboardingService, OnboardingServiceImpl};
pub use search_service::{PortalSearchService, SearchResponse, SearchService, SearchSettings};
