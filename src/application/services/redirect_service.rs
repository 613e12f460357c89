//! Short link resolution: path → record → redirect or expiry.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::domain::entities::{ResponseDescriptor, ShortLinkRecord};
use crate::domain::repositories::BlobStore;
use crate::error::ResolveError;

/// Suffix appended to a short code to form its storage key.
pub const KEY_SUFFIX: &str = ".json";

/// Extracts the short code from a raw request path.
///
/// Every `/` is removed, so `/foo/bar` becomes `foobar`. Returns `None` when
/// nothing is left.
pub fn extract_short_code(raw_path: &str) -> Option<String> {
    let code = raw_path.replace('/', "");
    (!code.is_empty()).then_some(code)
}

/// Builds the storage key for a short code.
pub fn storage_key(short_code: &str) -> String {
    format!("{}{}", short_code, KEY_SUFFIX)
}

/// Resolves short codes against a [`BlobStore`].
///
/// Holds no per-request state; a single instance is shared across all
/// requests. Each call performs at most one storage read.
pub struct RedirectResolver {
    store: Arc<dyn BlobStore>,
}

impl RedirectResolver {
    /// Creates a resolver over the given store.
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<dyn BlobStore> {
        &self.store
    }

    /// Resolves `raw_path` using the current wall-clock time.
    ///
    /// # Errors
    ///
    /// See [`Self::resolve_at`].
    pub async fn resolve(&self, raw_path: &str) -> Result<ResponseDescriptor, ResolveError> {
        self.resolve_at(raw_path, Utc::now().timestamp()).await
    }

    /// Resolves `raw_path` as if the current time were `now` (Unix seconds).
    ///
    /// # Request Flow
    ///
    /// 1. Strip all `/` from the path to get the short code
    /// 2. Fetch `<code>.json` from the store
    /// 3. Decode the record
    /// 4. `302` with `Location` if `expirationTime >= now`, otherwise `410`
    ///
    /// # Errors
    ///
    /// - [`ResolveError::InvalidRequest`] if the path has no short code
    /// - [`ResolveError::StorageFetch`] if the store read fails for any reason
    /// - [`ResolveError::Deserialization`] if the blob is not a valid record
    pub async fn resolve_at(
        &self,
        raw_path: &str,
        now: i64,
    ) -> Result<ResponseDescriptor, ResolveError> {
        let short_code = extract_short_code(raw_path)
            .ok_or_else(|| ResolveError::InvalidRequest("shortUrlCode is required".to_string()))?;

        let key = storage_key(&short_code);

        let bytes = self.store.get(&key).await.map_err(|source| {
            warn!("Failed to fetch {}: {}", key, source);
            ResolveError::StorageFetch {
                key: key.clone(),
                source,
            }
        })?;

        let record = ShortLinkRecord::from_slice(&bytes).map_err(|reason| {
            warn!("Malformed record at {}: {}", key, reason);
            ResolveError::Deserialization(reason)
        })?;

        if record.is_expired_at(now) {
            debug!(
                "Expired: {} (expired at {}, now {})",
                short_code, record.expiration_time_seconds, now
            );
            return Ok(ResponseDescriptor::expired());
        }

        debug!("Redirect: {} -> {}", short_code, record.original_url);
        Ok(ResponseDescriptor::redirect(record.original_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::EXPIRED_BODY;
    use crate::domain::repositories::{MockBlobStore, StorageError};

    const NOW: i64 = 1_760_000_000;

    fn record_json(url: &str, expiration: i64) -> Vec<u8> {
        serde_json::to_vec(&ShortLinkRecord::new(url, expiration)).unwrap()
    }

    fn resolver_returning(expected_key: &'static str, blob: Vec<u8>) -> RedirectResolver {
        let mut store = MockBlobStore::new();
        store
            .expect_get()
            .withf(move |key| key == expected_key)
            .times(1)
            .returning(move |_| Ok(blob.clone()));
        RedirectResolver::new(Arc::new(store))
    }

    #[test]
    fn test_extract_short_code() {
        assert_eq!(extract_short_code("/abc123"), Some("abc123".to_string()));
        assert_eq!(extract_short_code("abc123"), Some("abc123".to_string()));
        assert_eq!(extract_short_code("/foo/bar"), Some("foobar".to_string()));
        assert_eq!(extract_short_code("/abc/"), Some("abc".to_string()));
        assert_eq!(extract_short_code(""), None);
        assert_eq!(extract_short_code("/"), None);
        assert_eq!(extract_short_code("///"), None);
    }

    #[test]
    fn test_storage_key() {
        assert_eq!(storage_key("abc123"), "abc123.json");
        assert_eq!(storage_key("foobar"), "foobar.json");
    }

    #[tokio::test]
    async fn test_resolve_valid_record_redirects() {
        let resolver = resolver_returning(
            "promo2024.json",
            record_json("https://example.com/sale", NOW + 3600),
        );

        let resp = resolver.resolve_at("/promo2024", NOW).await.unwrap();

        assert_eq!(resp, ResponseDescriptor::redirect("https://example.com/sale"));
        assert_eq!(resp.location(), Some("https://example.com/sale"));
    }

    #[tokio::test]
    async fn test_resolve_expired_record_is_gone() {
        let resolver = resolver_returning("old.json", record_json("https://example.com", NOW - 1));

        let resp = resolver.resolve_at("/old", NOW).await.unwrap();

        assert_eq!(resp.status_code, 410);
        assert_eq!(resp.body.as_deref(), Some(EXPIRED_BODY));
        assert!(resp.headers.is_none());
    }

    #[tokio::test]
    async fn test_resolve_expiration_equal_to_now_is_valid() {
        let resolver = resolver_returning("edge.json", record_json("https://example.com", NOW));

        let resp = resolver.resolve_at("/edge", NOW).await.unwrap();

        assert_eq!(resp.status_code, 302);
    }

    #[tokio::test]
    async fn test_resolve_multi_segment_path_concatenates() {
        let resolver = resolver_returning("foobar.json", record_json("https://example.com", NOW));

        let resp = resolver.resolve_at("/foo/bar", NOW).await.unwrap();

        assert_eq!(resp.status_code, 302);
    }

    #[tokio::test]
    async fn test_resolve_empty_path_never_touches_store() {
        let mut store = MockBlobStore::new();
        store.expect_get().never();
        let resolver = RedirectResolver::new(Arc::new(store));

        for path in ["", "/", "//"] {
            let err = resolver.resolve_at(path, NOW).await.unwrap_err();
            assert_eq!(
                err,
                ResolveError::InvalidRequest("shortUrlCode is required".to_string())
            );
        }
    }

    #[tokio::test]
    async fn test_resolve_missing_record() {
        let mut store = MockBlobStore::new();
        store
            .expect_get()
            .withf(|key| key == "missing.json")
            .times(1)
            .returning(|key| Err(StorageError::NotFound(key.to_string())));
        let resolver = RedirectResolver::new(Arc::new(store));

        let err = resolver.resolve_at("/missing", NOW).await.unwrap_err();

        match err {
            ResolveError::StorageFetch { key, source } => {
                assert_eq!(key, "missing.json");
                assert!(source.is_not_found());
            }
            other => panic!("expected StorageFetch, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resolve_backend_failure_keeps_message() {
        let mut store = MockBlobStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_| Err(StorageError::Backend("connection reset".to_string())));
        let resolver = RedirectResolver::new(Arc::new(store));

        let err = resolver.resolve_at("/abc", NOW).await.unwrap_err();

        assert!(matches!(
            err,
            ResolveError::StorageFetch {
                source: StorageError::Backend(ref msg),
                ..
            } if msg == "connection reset"
        ));
    }

    #[tokio::test]
    async fn test_resolve_malformed_blob() {
        let resolver = resolver_returning("broken.json", b"{\"originalUrl\":".to_vec());

        let err = resolver.resolve_at("/broken", NOW).await.unwrap_err();

        assert!(matches!(err, ResolveError::Deserialization(_)));
    }

    #[tokio::test]
    async fn test_resolve_uses_wall_clock() {
        let resolver = resolver_returning(
            "far.json",
            record_json("https://example.com", Utc::now().timestamp() + 86_400),
        );

        let resp = resolver.resolve("/far").await.unwrap();

        assert_eq!(resp.status_code, 302);
    }
}
