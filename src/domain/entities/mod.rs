//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures; the few helpers they carry are pure.
//!
//! # Entity Types
//!
//! - [`Camp`] - A code camp, addressed by its moniker
//! - [`Location`] - Venue value object owned by a camp
//! - [`Talk`] - A talk given at a camp by a speaker
//! - [`Speaker`] - A presenter, shared across talks and camps
//!
//! # Ownership
//!
//! A camp owns its location and its talks (cascade on delete). A talk only
//! references its speaker, so speakers outlive the talks that mention them.
//! New talks are built from [`TalkFields`] plus the resolved relationships.

pub mod camp;
pub mod location;
pub mod speaker;
pub mod talk;

pub use camp::Camp;
pub use location::Location;
pub use speaker::Speaker;
pub use talk::{Talk, TalkFields};
