//! # Link Redirector
//!
//! Resolves short links stored as JSON objects in an S3 bucket and answers
//! with an HTTP redirect or an expiry notice.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Records, request/response descriptors, storage port
//! - **Application Layer** ([`application`]) - The redirect resolver
//! - **Infrastructure Layer** ([`infrastructure`]) - S3 and in-memory blob stores
//! - **API Layer** ([`api`]) - Axum handlers and middleware
//!
//! ## Request Flow
//!
//! 1. `GET /promo2024` arrives; the short code is the path with every `/` removed
//! 2. `promo2024.json` is read from the bucket
//! 3. `302 Found` to `originalUrl`, or `410 Gone` once `expirationTime` has passed
//!
//! Records are never written by this service.
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_BUCKET="url-shortener-storage"
//! export AWS_REGION="us-east-1"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod routes;
pub mod server;
pub mod telemetry;

pub use error::{AppError, ResolveError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::RedirectResolver;
    pub use crate::domain::entities::{RequestContext, ResponseDescriptor, ShortLinkRecord};
    pub use crate::domain::repositories::{BlobStore, StorageError};
    pub use crate::error::{AppError, ResolveError};
    pub use crate::infrastructure::storage::{MemoryBlobStore, S3BlobStore};
    pub use crate::state::AppState;
}
