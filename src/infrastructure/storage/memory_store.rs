//! In-process blob store for tests and local runs.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::application::services::storage_key;
use crate::domain::entities::ShortLinkRecord;
use crate::domain::repositories::{BlobStore, StorageError};

/// A [`BlobStore`] backed by a `HashMap`.
///
/// Can be switched to an unavailable state to simulate backend outages.
pub struct MemoryBlobStore {
    objects: RwLock<HashMap<String, Vec<u8>>>,
    available: AtomicBool,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Stores raw bytes under `key`.
    pub async fn put(&self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.objects.write().await.insert(key.into(), bytes.into());
    }

    /// Stores `record` under the key the resolver uses for `short_code`.
    pub async fn put_record(&self, short_code: &str, record: &ShortLinkRecord) {
        let bytes = serde_json::to_vec(record).unwrap_or_default();
        self.put(storage_key(short_code), bytes).await;
    }

    /// Makes every subsequent call fail (`false`) or succeed (`true`).
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}

impl Default for MemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        if !self.is_available() {
            return Err(StorageError::Backend("memory store unavailable".to_string()));
        }

        let objects = self.objects.read().await;
        match objects.get(key) {
            Some(bytes) => Ok(bytes.clone()),
            None => {
                debug!("Memory MISS: {}", key);
                Err(StorageError::NotFound(key.to_string()))
            }
        }
    }

    async fn health_check(&self) -> bool {
        self.is_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_get() {
        let store = MemoryBlobStore::new();
        store.put("abc.json", b"{}".to_vec()).await;

        assert_eq!(store.get("abc.json").await.unwrap(), b"{}".to_vec());
    }

    #[tokio::test]
    async fn test_missing_key_is_not_found() {
        let store = MemoryBlobStore::new();

        let err = store.get("missing.json").await.unwrap_err();
        assert_eq!(err, StorageError::NotFound("missing.json".to_string()));
    }

    #[tokio::test]
    async fn test_put_record_uses_storage_key() {
        let store = MemoryBlobStore::new();
        store
            .put_record("promo", &ShortLinkRecord::new("https://example.com", 1))
            .await;

        assert!(store.get("promo.json").await.is_ok());
    }

    #[tokio::test]
    async fn test_unavailable_store_fails() {
        let store = MemoryBlobStore::new();
        store.put("abc.json", b"{}".to_vec()).await;
        store.set_available(false);

        assert!(matches!(
            store.get("abc.json").await,
            Err(StorageError::Backend(_))
        ));
        assert!(!store.health_check().await);

        store.set_available(true);
        assert!(store.health_check().await);
    }
}
