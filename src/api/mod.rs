//! HTTP layer: translates requests into resolver calls and resolver outcomes
//! into responses.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies for auxiliary endpoints
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Router construction

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
