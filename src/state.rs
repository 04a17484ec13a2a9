//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{CampService, SpeakerService, TalkService};
use crate::config::SharedConfig;
use crate::domain::repositories::CampRepository;

/// Services and configuration shared by all requests.
///
/// The services are built over a trait object so the same router runs on
/// PostgreSQL in production and on the in-memory store in tests.
#[derive(Clone)]
pub struct AppState {
    pub camp_service: Arc<CampService<dyn CampRepository>>,
    pub talk_service: Arc<TalkService<dyn CampRepository>>,
    pub speaker_service: Arc<SpeakerService<dyn CampRepository>>,
    pub config: SharedConfig,
}

impl AppState {
    pub fn new(repository: Arc<dyn CampRepository>, config: SharedConfig) -> Self {
        Self {
            camp_service: Arc::new(CampService::new(repository.clone())),
            talk_service: Arc::new(TalkService::new(repository.clone())),
            speaker_service: Arc::new(SpeakerService::new(repository)),
            config,
        }
    }
}
