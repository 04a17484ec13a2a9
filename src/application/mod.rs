//! Application layer services implementing the camp business rules.
//!
//! Services consume the [`CampRepository`](crate::domain::repositories::CampRepository)
//! trait, resolve relationships, and turn the repository's commit signal into
//! client-facing errors. They know nothing about HTTP or transfer models.
//!
//! # Available Services
//!
//! - [`services::camp_service::CampService`] - Camp lookup, search and lifecycle
//! - [`services::talk_service::TalkService`] - Talks of a camp and their speakers
//! - [`services::speaker_service::SpeakerService`] - Speaker catalogue

pub mod services;
