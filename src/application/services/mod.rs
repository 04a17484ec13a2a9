//! Business logic services for the application layer.

pub mod camp_service;
pub mod speaker_service;
pub mod talk_service;

pub use camp_service::CampService;
pub use speaker_service::SpeakerService;
pub use talk_service::TalkService;

/// Message used whenever a moniker does not resolve to a camp.
pub(crate) fn camp_not_found_message(moniker: &str) -> String {
    format!("Could not find camp with moniker of {moniker}")
}
