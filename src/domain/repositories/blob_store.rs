//! Read-only port to the object store holding short link records.

use async_trait::async_trait;
use thiserror::Error;

/// Failure reading a blob.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The key does not exist in the bucket.
    #[error("object not found: {0}")]
    NotFound(String),
    /// Network, permission, or any other backend failure.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Key-value blob store accessed by string key.
///
/// The bucket or namespace is fixed when the implementation is built;
/// callers only supply keys.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::S3BlobStore`] - AWS S3 or S3-compatible
/// - [`crate::infrastructure::storage::MemoryBlobStore`] - In-process map for tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Fetches the full contents of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if the key is absent and
    /// [`StorageError::Backend`] for every other failure.
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    /// Checks that the store is reachable.
    async fn health_check(&self) -> bool;
}
