//! Repository trait for camps, talks and speakers.

use crate::domain::entities::{Camp, Speaker, Talk};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Persistence interface for the camp aggregate and the speakers it references.
///
/// Lookups return `Ok(None)` / an empty `Vec` when nothing matches. Each
/// mutation is committed on its own; its return value is the commit signal:
///
/// - `Err(_)` - the store failed (connection, constraint, ...)
/// - `Ok(false)` / `Ok(None)` - the call went through but nothing was persisted
/// - `Ok(true)` / `Ok(Some(_))` - the change is durable
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCampRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryCampRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampRepository: Send + Sync {
    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;

    /// Lists all camps ordered by id, optionally with their talks loaded.
    async fn list_camps(&self, include_talks: bool) -> Result<Vec<Camp>, AppError>;

    /// Finds a camp by moniker.
    async fn find_camp(&self, moniker: &str, include_talks: bool)
    -> Result<Option<Camp>, AppError>;

    /// Finds every camp that is held on `date`.
    async fn find_camps_by_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, AppError>;

    /// Inserts a new camp and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the moniker violates the unique constraint.
    async fn insert_camp(&self, camp: &Camp) -> Result<Option<Camp>, AppError>;

    /// Replaces the structural fields and location of an existing camp.
    ///
    /// Talks are not touched.
    async fn update_camp(&self, camp: &Camp) -> Result<bool, AppError>;

    /// Deletes a camp together with its talks.
    async fn delete_camp(&self, camp_id: i64) -> Result<bool, AppError>;

    /// Lists the talks of the camp with the given moniker, speakers resolved.
    async fn list_talks(&self, moniker: &str) -> Result<Vec<Talk>, AppError>;

    /// Finds one talk of the camp with the given moniker, speaker resolved.
    async fn find_talk(&self, moniker: &str, talk_id: i64) -> Result<Option<Talk>, AppError>;

    /// Inserts a new talk and returns it with its assigned id.
    async fn insert_talk(&self, talk: &Talk) -> Result<Option<Talk>, AppError>;

    /// Saves the scalar fields and the speaker reference of an existing talk.
    async fn update_talk(&self, talk: &Talk) -> Result<bool, AppError>;

    /// Deletes a talk. The referenced speaker is kept.
    async fn delete_talk(&self, talk_id: i64) -> Result<bool, AppError>;

    /// Lists all speakers ordered by id.
    async fn list_speakers(&self) -> Result<Vec<Speaker>, AppError>;

    /// Finds a speaker by id.
    async fn find_speaker(&self, speaker_id: i64) -> Result<Option<Speaker>, AppError>;

    /// Inserts a new speaker and returns it with its assigned id.
    async fn insert_speaker(&self, speaker: &Speaker) -> Result<Option<Speaker>, AppError>;
}
