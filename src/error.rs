//! Error types for resolving short links and their HTTP representation.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::domain::repositories::StorageError;

/// Failure of a single resolve invocation.
///
/// Every variant is fatal to the invocation; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The request path yields no short code.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Reading `key` from the blob store failed.
    #[error("error fetching URL data from storage: {source}")]
    StorageFetch { key: String, source: StorageError },

    /// The stored blob is not a valid short link record.
    #[error("error deserializing URL data: {0}")]
    Deserialization(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Error returned by HTTP handlers, rendered as a JSON envelope.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    BadGateway { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn bad_gateway(message: impl Into<String>, details: Value) -> Self {
        Self::BadGateway {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::InvalidRequest(reason) => {
                AppError::bad_request("Short code is required", json!({ "reason": reason }))
            }
            ResolveError::StorageFetch {
                key,
                source: StorageError::NotFound(_),
            } => AppError::not_found("Short link not found", json!({ "key": key })),
            ResolveError::StorageFetch {
                key,
                source: StorageError::Backend(_),
            } => AppError::bad_gateway("Failed to fetch short link", json!({ "key": key })),
            ResolveError::Deserialization(_) => {
                AppError::internal("Stored short link is malformed", json!({}))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::BadGateway { message, details } => ("bad_gateway", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
