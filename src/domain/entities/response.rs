//! Transport-neutral response produced by the resolver.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body returned for expired links.
pub const EXPIRED_BODY: &str = "This URL has expired.";

/// Status, headers, and body of a resolver outcome.
///
/// Serializes as `{"statusCode": 302, "headers": {"Location": "..."}}`;
/// absent headers or body are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDescriptor {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ResponseDescriptor {
    /// `302 Found` pointing at `location`.
    pub fn redirect(location: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Location".to_string(), location.into());

        Self {
            status_code: 302,
            headers: Some(headers),
            body: None,
        }
    }

    /// `410 Gone` with the fixed expiry message.
    pub fn expired() -> Self {
        Self {
            status_code: 410,
            headers: None,
            body: Some(EXPIRED_BODY.to_string()),
        }
    }

    /// Returns the `Location` header, if any.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .as_ref()
            .and_then(|h| h.get("Location"))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_shape() {
        let resp = ResponseDescriptor::redirect("https://example.com/sale");

        assert_eq!(resp.status_code, 302);
        assert_eq!(resp.location(), Some("https://example.com/sale"));
        assert!(resp.body.is_none());

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "statusCode": 302,
                "headers": { "Location": "https://example.com/sale" }
            })
        );
    }

    #[test]
    fn test_expired_shape() {
        let json = serde_json::to_value(ResponseDescriptor::expired()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "statusCode": 410, "body": "This URL has expired." })
        );
    }
}
