//! Application layer.
//!
//! [`services::RedirectResolver`] turns a request path into a
//! [`crate::domain::entities::ResponseDescriptor`] by reading one record
//! through the [`crate::domain::repositories::BlobStore`] port.

pub mod services;
