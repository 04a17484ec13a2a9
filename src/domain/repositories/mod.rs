//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for service tests.
//!
//! # Testing
//!
//! See `tests/repository_camp.rs` for the PostgreSQL implementation and the
//! `tests/handler_*.rs` suites for end-to-end use over the in-memory store.

pub mod camp_repository;

pub use camp_repository::CampRepository;

#[cfg(test)]
pub use camp_repository::MockCampRepository;
