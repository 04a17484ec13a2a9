//! Talks of a camp.

use super::camp_not_found_message;
use crate::domain::entities::{Speaker, Talk, TalkFields};
use crate::domain::repositories::CampRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for the talks scheduled at a camp.
///
/// Talks are always addressed through their camp's moniker. The owning camp
/// and the speaker are looked up here and attached to the talk; they are never
/// taken from client input as-is.
pub struct TalkService<R: CampRepository + ?Sized> {
    repository: Arc<R>,
}

fn talk_not_found(talk_id: i64) -> AppError {
    AppError::not_found(
        format!("Talk with {talk_id} could not be found"),
        json!({"id": talk_id}),
    )
}

impl<R: CampRepository + ?Sized> TalkService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists the talks of a camp. An unknown moniker yields an empty list.
    pub async fn list_talks(&self, moniker: &str) -> Result<Vec<Talk>, AppError> {
        self.repository.list_talks(moniker).await
    }

    /// Retrieves one talk of a camp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the camp has no talk with this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_talk(&self, moniker: &str, talk_id: i64) -> Result<Talk, AppError> {
        self.repository
            .find_talk(moniker, talk_id)
            .await?
            .ok_or_else(|| talk_not_found(talk_id))
    }

    /// Creates a talk in the camp with the given moniker.
    ///
    /// Checks run in order: the camp must exist, a speaker id must be
    /// supplied, and that speaker must exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when any check fails or the store
    /// saved nothing.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_talk(
        &self,
        moniker: &str,
        fields: TalkFields,
        speaker_id: Option<i64>,
    ) -> Result<Talk, AppError> {
        let camp = self
            .repository
            .find_camp(moniker, false)
            .await?
            .ok_or_else(|| {
                AppError::bad_request(camp_not_found_message(moniker), json!({"moniker": moniker}))
            })?;

        let speaker_id = speaker_id
            .ok_or_else(|| AppError::bad_request("Speaker Id is required", json!({})))?;
        let speaker = self.resolve_speaker(speaker_id).await?.ok_or_else(|| {
            AppError::bad_request("Speaker could not be found", json!({"speaker_id": speaker_id}))
        })?;

        let created = self
            .repository
            .insert_talk(&Talk::attach(fields, camp.id, speaker))
            .await?
            .ok_or_else(AppError::unsaved)?;

        tracing::info!(talk_id = created.id, moniker = %moniker, "Talk created");
        Ok(created)
    }

    /// Loads a talk, applies `apply` to its fields and saves it.
    ///
    /// When `speaker_id` is supplied and resolves, the talk is reassigned to
    /// that speaker. An id that does not resolve leaves the current speaker in
    /// place and is not reported to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the camp has no talk with this id.
    /// Returns [`AppError::Validation`] if the store saved nothing.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_talk<F>(
        &self,
        moniker: &str,
        talk_id: i64,
        apply: F,
        speaker_id: Option<i64>,
    ) -> Result<Talk, AppError>
    where
        F: FnOnce(&mut Talk) + Send,
    {
        let mut talk = self.get_talk(moniker, talk_id).await?;
        apply(&mut talk);

        if let Some(speaker_id) = speaker_id {
            match self.resolve_speaker(speaker_id).await? {
                Some(speaker) => talk.speaker = speaker,
                None => tracing::debug!(
                    talk_id,
                    speaker_id,
                    "Unknown speaker on talk update, keeping current speaker"
                ),
            }
        }

        if !self.repository.update_talk(&talk).await? {
            return Err(AppError::unsaved());
        }

        Ok(talk)
    }

    /// Deletes a talk; its speaker is kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the camp has no talk with this id.
    /// Returns [`AppError::Validation`] if the store deleted nothing.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_talk(&self, moniker: &str, talk_id: i64) -> Result<(), AppError> {
        let talk = self.get_talk(moniker, talk_id).await?;

        if !self.repository.delete_talk(talk.id).await? {
            return Err(AppError::unsaved());
        }

        tracing::info!(talk_id, moniker = %moniker, "Talk deleted");
        Ok(())
    }

    async fn resolve_speaker(&self, speaker_id: i64) -> Result<Option<Speaker>, AppError> {
        self.repository.find_speaker(speaker_id).await
    }
}
