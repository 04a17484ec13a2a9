//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to the published wire contract.
//!
//! # Modules
//!
//! - [`dto`] - Transfer models for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`links`] - Canonical resource paths for `Location` headers
//! - [`mapping`] - Entity ↔ transfer model translation
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration and composition
//! - [`versioning`] - API version negotiation

pub mod dto;
pub mod handlers;
pub mod links;
pub mod mapping;
pub mod middleware;
pub mod routes;
pub mod versioning;
