//! Speaker catalogue service.

use crate::domain::entities::Speaker;
use crate::domain::repositories::CampRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for the speakers that talks reference.
pub struct SpeakerService<R: CampRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: CampRepository + ?Sized> SpeakerService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list_speakers(&self) -> Result<Vec<Speaker>, AppError> {
        self.repository.list_speakers().await
    }

    /// Retrieves a speaker by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the speaker does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_speaker(&self, speaker_id: i64) -> Result<Speaker, AppError> {
        self.repository
            .find_speaker(speaker_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    format!("Speaker with {speaker_id} could not be found"),
                    json!({"id": speaker_id}),
                )
            })
    }

    /// Persists a new speaker. Any id on the input is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the store saved nothing.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_speaker(&self, speaker: Speaker) -> Result<Speaker, AppError> {
        let speaker = Speaker { id: 0, ..speaker };

        let created = self
            .repository
            .insert_speaker(&speaker)
            .await?
            .ok_or_else(AppError::unsaved)?;

        tracing::info!(speaker_id = created.id, "Speaker created");
        Ok(created)
    }
}
