//! Incoming invocation context.

use serde::{Deserialize, Serialize};

/// The part of an incoming request the resolver needs.
///
/// Deserializes from runtime-style events such as
/// `{"rawPath": "/abc123", "headers": {...}}`; fields other than `rawPath`
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(default)]
    pub raw_path: String,
}

impl RequestContext {
    pub fn new(raw_path: impl Into<String>) -> Self {
        Self {
            raw_path: raw_path.into(),
        }
    }
}
