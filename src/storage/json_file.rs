use crate::error::{StoreError, StoreResult};
use crate::storage::traits::KeyValueStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

type Entries = BTreeMap<String, String>;

/// Store persisted as a single JSON object on disk.
///
/// The file is read on first access and rewritten after every mutation.
/// File I/O runs on the blocking thread pool. A missing file reads as an
/// empty store and is created on the first write.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<Option<Entries>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the cached entries, loading them from disk on first use.
    async fn loaded<'g>(&self, slot: &'g mut Option<Entries>) -> StoreResult<&'g mut Entries> {
        if slot.is_none() {
            let entries = read_entries(self.path.clone()).await?;
            tracing::debug!(
                path = %self.path.display(),
                keys = entries.len(),
                "Loaded key-value store"
            );
            *slot = Some(entries);
        }
        Ok(slot.get_or_insert_with(Entries::new))
    }
}

async fn read_entries(path: PathBuf) -> StoreResult<Entries> {
    tokio::task::spawn_blocking(move || -> StoreResult<Entries> {
        match std::fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => Ok(Entries::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(StoreError::Io(format!("{}: {}", path.display(), e))),
        }
    })
    .await
    .map_err(|e| StoreError::Io(format!("Task join error: {}", e)))?
}

async fn write_entries(path: PathBuf, entries: &Entries) -> StoreResult<()> {
    let contents = serde_json::to_string_pretty(entries)?;

    tokio::task::spawn_blocking(move || -> StoreResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Io(format!("{}: {}", parent.display(), e)))?;
        }

        // Write then rename so readers never observe a half-written file
        let tmp_path = path.with_extension("tmp");
        std::fs::write(&tmp_path, contents)
            .map_err(|e| StoreError::Io(format!("{}: {}", tmp_path.display(), e)))?;
        std::fs::rename(&tmp_path, &path)
            .map_err(|e| StoreError::Io(format!("{}: {}", path.display(), e)))
    })
    .await
    .map_err(|e| StoreError::Io(format!("Task join error: {}", e)))?
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut guard = self.entries.lock().await;
        let entries = self.loaded(&mut guard).await?;
        Ok(entries.get(key).cloned())
    }

    // Mutations are applied to a copy; memory only changes once the file does
    async fn set(&self, key: &str, value: String) -> StoreResult<()> {
        let mut guard = self.entries.lock().await;
        let entries = self.loaded(&mut guard).await?;

        let mut updated = entries.clone();
        updated.insert(key.to_string(), value);
        write_entries(self.path.clone(), &updated).await?;
        *entries = updated;
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        let mut guard = self.entries.lock().await;
        let entries = self.loaded(&mut guard).await?;
        if !entries.contains_key(key) {
            return Ok(());
        }

        let mut updated = entries.clone();
        updated.remove(key);
        write_entries(self.path.clone(), &updated).await?;
        *entries = updated;
        Ok(())
    }
}
