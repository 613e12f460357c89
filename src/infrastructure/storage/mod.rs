//! Blob store implementations.
//!
//! - [`S3BlobStore`] - Production store over `aws-sdk-s3`
//! - [`MemoryBlobStore`] - In-process map for tests

mod memory_store;
mod s3_store;

pub use memory_store::MemoryBlobStore;
pub use s3_store::S3BlobStore;
