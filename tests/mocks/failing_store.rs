use async_trait::async_trait;
use care_portal_search::error::{StoreError, StoreResult};
use care_portal_search::storage::KeyValueStore;

/// Key-value store whose every operation fails.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Io("store offline".to_string()))
    }

    async fn set(&self, _key: &str, _value: String) -> StoreResult<()> {
        Err(StoreError::Io("store offline".to_string()))
    }

    async fn remove(&self, _key: &str) -> StoreResult<()> {
        Err(StoreError::Io("store offline".to_string()))
    }
}
