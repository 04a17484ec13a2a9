//! HTTP middleware for request processing.
//!
//! Version negotiation lives in [`crate::api::versioning`].

pub mod tracing;
