//! Domain layer: records, request/response descriptors, and the storage port.
//!
//! - [`entities`] - [`entities::ShortLinkRecord`], [`entities::RequestContext`],
//!   [`entities::ResponseDescriptor`]
//! - [`repositories`] - the read-only [`repositories::BlobStore`] trait
//!
//! Nothing here depends on HTTP or on a concrete storage backend.

pub mod entities;
pub mod repositories;
