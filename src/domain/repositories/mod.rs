//! Storage port for the domain layer.
//!
//! The resolver depends on the [`BlobStore`] trait only; concrete stores live
//! in `crate::infrastructure::storage`. A `mockall` mock is generated for
//! unit tests.

pub mod blob_store;

pub use blob_store::{BlobStore, StorageError};

#[cfg(test)]
pub use blob_store::MockBlobStore;
