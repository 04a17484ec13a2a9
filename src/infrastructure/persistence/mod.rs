//! Camp repository implementations.
//!
//! # Repositories
//!
//! - [`PgCampRepository`] - PostgreSQL storage through SQLx
//! - [`InMemoryCampRepository`] - mutex-guarded in-process store

pub mod memory_camp_repository;
pub mod pg_camp_repository;

pub use memory_camp_repository::InMemoryCampRepository;
pub use pg_camp_repository::PgCampRepository;
