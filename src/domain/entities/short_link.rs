//! Short link record as stored in the object store.

use serde::{Deserialize, Serialize};
use url::Url;

/// A redirect record keyed by short code.
///
/// Stored as a JSON blob at `<code>.json`:
///
/// ```json
/// { "originalUrl": "https://example.com/sale", "expirationTime": 1767225600 }
/// ```
///
/// Records are written by a separate link-creation process; this service
/// only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortLinkRecord {
    pub original_url: String,
    /// Unix epoch seconds after which the record is expired.
    #[serde(rename = "expirationTime")]
    pub expiration_time_seconds: i64,
}

impl ShortLinkRecord {
    /// Creates a new record.
    pub fn new(original_url: impl Into<String>, expiration_time_seconds: i64) -> Self {
        Self {
            original_url: original_url.into(),
            expiration_time_seconds,
        }
    }

    /// Decodes and validates a record from raw blob bytes.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason if the bytes are not valid JSON, a
    /// required field is missing, or `originalUrl` is not an absolute URL.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, String> {
        let record: Self = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
        record.validate()?;
        Ok(record)
    }

    fn validate(&self) -> Result<(), String> {
        if self.original_url.trim().is_empty() {
            return Err("originalUrl must not be empty".to_string());
        }

        Url::parse(&self.original_url)
            .map_err(|e| format!("originalUrl is not an absolute URL: {}", e))?;

        Ok(())
    }

    /// Returns true if the record expired strictly before `now`.
    ///
    /// A record whose expiration equals `now` is still valid.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expiration_time_seconds < now
    }
}
