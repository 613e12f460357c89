//! Infrastructure layer for external integrations.
//!
//! Implements the domain's [`crate::domain::repositories::BlobStore`] port.
//!
//! # Modules
//!
//! - [`storage`] - S3 and in-memory blob stores

pub mod storage;
