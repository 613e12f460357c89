//! Application services.

pub mod redirect_service;

pub use redirect_service::{RedirectResolver, extract_short_code, storage_key};
