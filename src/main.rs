//! Care Portal Search - main entry point
//!
//! Serves portal search and onboarding tools over MCP on stdin/stdout.

use anyhow::Result;
use care_portal_search::repositories::{RecordSource, SnapshotRecordSource};
use care_portal_search::services::{
    OnboardingService, OnboardingServiceImpl, PortalSearchService, SearchService, SearchSettings,
};
use care_portal_search::storage::{JsonFileStore, KeyValueStore};
use care_portal_search::{Config, PortalSearchServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    // Logs go to stderr; stdout carries MCP traffic
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting portal search server with snapshots from {}",
        config.snapshot_dir.display()
    );

    let source = Arc::new(SnapshotRecordSource::new(&config.snapshot_dir)) as Arc<dyn RecordSource>;
    let store = Arc::new(JsonFileStore::new(&config.state_file)) as Arc<dyn KeyValueStore>;

    let search_service = Arc::new(PortalSearchService::new(
        source,
        store.clone(),
        SearchSettings::from(&config),
    )) as Arc<dyn SearchService>;
    let onboarding_service =
        Arc::new(OnboardingServiceImpl::new(store)) as Arc<dyn OnboardingService>;

    let server = PortalSearchServer::new(search_service, onboarding_service);

    info!(
        "Bundle cache TTL: {} minutes, default limit: {}, recent searches kept: {}",
        config.cache_ttl_minutes, config.default_search_limit, config.recent_search_limit
    );

    info!("Starting MCP server with stdio transport");
    care_portal_search::server::run_server(server).await?;

    info!("Portal search server shutdown complete");
    Ok(())
}
