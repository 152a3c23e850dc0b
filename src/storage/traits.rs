use crate::error::StoreResult;
use async_trait::async_trait;

/// String key-value storage for small pieces of per-user state.
///
/// Implementations must be safe to share across tasks; a `set` must be
/// visible to every subsequent `get` on the same store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> StoreResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> StoreResult<()>;
}
