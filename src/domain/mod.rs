//! Domain layer containing business entities and repository contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business rules live in [`crate::application::services`].
//!
//! # Architecture
//!
//! - [`entities`] - Camps, talks, speakers and locations
//! - [`repositories`] - Data access trait definitions
//!
//! # Persistence Contract
//!
//! Every mutation on [`repositories::CampRepository`] is its own commit. A
//! mutation that raises an error means the store failed; a mutation that
//! returns "nothing committed" (`false` / `None`) means the store accepted the
//! call but did not persist anything. Callers treat the two differently.

pub mod entities;
pub mod repositories;
