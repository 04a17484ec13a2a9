//! Camp lookup, search and lifecycle service.

use super::camp_not_found_message;
use crate::domain::entities::Camp;
use crate::domain::repositories::CampRepository;
use crate::error::AppError;
use chrono::NaiveDate;
use serde_json::json;
use std::sync::Arc;

/// Service for managing code camps.
///
/// Enforces the rules that the store alone does not express:
/// - A moniker addresses at most one camp; creating over a taken moniker is a
///   client error, not a store failure
/// - A date search with no match is "not found", not an empty result
/// - A mutation the store reports as not persisted becomes a 400
pub struct CampService<R: CampRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: CampRepository + ?Sized> CampService<R> {
    /// Creates a new camp service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Checks that the backing store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Lists every camp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_camps(&self, include_talks: bool) -> Result<Vec<Camp>, AppError> {
        self.repository.list_camps(include_talks).await
    }

    /// Retrieves a camp by moniker.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no camp has this moniker.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_camp(&self, moniker: &str, include_talks: bool) -> Result<Camp, AppError> {
        self.repository
            .find_camp(moniker, include_talks)
            .await?
            .ok_or_else(|| {
                AppError::not_found(camp_not_found_message(moniker), json!({"moniker": moniker}))
            })
    }

    /// Finds the camps held on `date`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no camp is held on that date.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn search_by_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, AppError> {
        let camps = self
            .repository
            .find_camps_by_date(date, include_talks)
            .await?;

        if camps.is_empty() {
            return Err(AppError::not_found(
                format!("No camps held on {date}"),
                json!({"date": date}),
            ));
        }

        Ok(camps)
    }

    /// Fails if the moniker already belongs to a camp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with "Moniker in use" if it is taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn ensure_moniker_available(&self, moniker: &str) -> Result<(), AppError> {
        if self.repository.find_camp(moniker, false).await?.is_some() {
            return Err(AppError::bad_request(
                "Moniker in use",
                json!({"moniker": moniker}),
            ));
        }
        Ok(())
    }

    /// Persists a new camp.
    ///
    /// The caller is expected to have checked the moniker with
    /// [`Self::ensure_moniker_available`]; a concurrent insert of the same
    /// moniker is rejected by the store's unique constraint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the store saved nothing.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_camp(&self, camp: Camp) -> Result<Camp, AppError> {
        let created = self
            .repository
            .insert_camp(&camp)
            .await?
            .ok_or_else(AppError::unsaved)?;

        tracing::info!(camp_id = created.id, moniker = %created.moniker, "Camp created");
        Ok(created)
    }

    /// Loads a camp, applies `apply` to it and saves the result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no camp has this moniker.
    /// Returns [`AppError::Validation`] if the store saved nothing.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_camp<F>(&self, moniker: &str, apply: F) -> Result<Camp, AppError>
    where
        F: FnOnce(&mut Camp) + Send,
    {
        let mut camp = self.get_camp(moniker, false).await?;
        apply(&mut camp);

        if !self.repository.update_camp(&camp).await? {
            return Err(AppError::unsaved());
        }

        tracing::info!(camp_id = camp.id, moniker = %camp.moniker, "Camp updated");
        Ok(camp)
    }

    /// Deletes a camp and, with it, its talks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no camp has this moniker.
    /// Returns [`AppError::Validation`] if the store deleted nothing.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_camp(&self, moniker: &str) -> Result<(), AppError> {
        let camp = self.get_camp(moniker, false).await?;

        if !self.repository.delete_camp(camp.id).await? {
            return Err(AppError::unsaved());
        }

        tracing::info!(camp_id = camp.id, moniker = %moniker, "Camp deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Location;
    use crate::domain::repositories::MockCampRepository;

    fn create_test_camp(id: i64, moniker: &str) -> Camp {
        Camp {
            id,
            moniker: moniker.to_string(),
            name: format!("{moniker} Code Camp"),
            event_date: NaiveDate::from_ymd_opt(2018, 10, 18).unwrap(),
            length: 1,
            location: Location::default(),
            talks: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_get_camp_success() {
        let mut mock_repo = MockCampRepository::new();

        let camp = create_test_camp(1, "ATL2018");
        mock_repo
            .expect_find_camp()
            .withf(|moniker, include_talks| moniker == "ATL2018" && *include_talks)
            .times(1)
            .returning(move |_, _| Ok(Some(camp.clone())));

        let service = CampService::new(Arc::new(mock_repo));

        let result = service.get_camp("ATL2018", true).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_get_camp_not_found_names_moniker() {
        let mut mock_repo = MockCampRepository::new();

        mock_repo
            .expect_find_camp()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = CampService::new(Arc::new(mock_repo));

        let err = service.get_camp("NOPE", false).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "Could not find camp with moniker of NOPE");
    }

    #[tokio::test]
    async fn test_search_by_date_without_match_is_not_found() {
        let mut mock_repo = MockCampRepository::new();

        mock_repo
            .expect_find_camps_by_date()
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let service = CampService::new(Arc::new(mock_repo));

        let result = service
            .search_by_date(NaiveDate::from_ymd_opt(2001, 1, 1).unwrap(), false)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_ensure_moniker_available_rejects_taken_moniker() {
        let mut mock_repo = MockCampRepository::new();

        let existing = create_test_camp(1, "ATL2018");
        mock_repo
            .expect_find_camp()
            .withf(|moniker, include_talks| moniker == "ATL2018" && !*include_talks)
            .times(1)
            .returning(move |_, _| Ok(Some(existing.clone())));

        let service = CampService::new(Arc::new(mock_repo));

        let err = service.ensure_moniker_available("ATL2018").await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Moniker in use");
    }

    #[tokio::test]
    async fn test_create_camp_returns_assigned_id() {
        let mut mock_repo = MockCampRepository::new();

        mock_repo
            .expect_insert_camp()
            .times(1)
            .returning(|camp| Ok(Some(Camp { id: 42, ..camp.clone() })));

        let service = CampService::new(Arc::new(mock_repo));

        let created = service
            .create_camp(create_test_camp(0, "SD2019"))
            .await
            .unwrap();

        assert_eq!(created.id, 42);
        assert_eq!(created.moniker, "SD2019");
    }

    #[tokio::test]
    async fn test_create_camp_nothing_saved() {
        let mut mock_repo = MockCampRepository::new();

        mock_repo
            .expect_insert_camp()
            .times(1)
            .returning(|_| Ok(None));

        let service = CampService::new(Arc::new(mock_repo));

        let err = service
            .create_camp(create_test_camp(0, "SD2019"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_camp_store_failure_is_internal() {
        let mut mock_repo = MockCampRepository::new();

        mock_repo
            .expect_insert_camp()
            .times(1)
            .returning(|_| Err(AppError::internal("duplicate key value")));

        let service = CampService::new(Arc::new(mock_repo));

        let err = service
            .create_camp(create_test_camp(0, "ATL2018"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_update_camp_applies_changes() {
        let mut mock_repo = MockCampRepository::new();

        let camp = create_test_camp(1, "ATL2018");
        mock_repo
            .expect_find_camp()
            .times(1)
            .returning(move |_, _| Ok(Some(camp.clone())));
        mock_repo
            .expect_update_camp()
            .withf(|camp| camp.id == 1 && camp.name == "Renamed")
            .times(1)
            .returning(|_| Ok(true));

        let service = CampService::new(Arc::new(mock_repo));

        let updated = service
            .update_camp("ATL2018", |camp| camp.name = "Renamed".to_string())
            .await
            .unwrap();

        assert_eq!(updated.name, "Renamed");
    }

    #[tokio::test]
    async fn test_update_missing_camp_never_writes() {
        let mut mock_repo = MockCampRepository::new();

        mock_repo
            .expect_find_camp()
            .times(1)
            .returning(|_, _| Ok(None));
        mock_repo.expect_update_camp().never();

        let service = CampService::new(Arc::new(mock_repo));

        let result = service.update_camp("NOPE", |_| {}).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_camp_unsuccessful_commit() {
        let mut mock_repo = MockCampRepository::new();

        let camp = create_test_camp(3, "ATL2018");
        mock_repo
            .expect_find_camp()
            .times(1)
            .returning(move |_, _| Ok(Some(camp.clone())));
        mock_repo
            .expect_delete_camp()
            .withf(|id| *id == 3)
            .times(1)
            .returning(|_| Ok(false));

        let service = CampService::new(Arc::new(mock_repo));

        let result = service.delete_camp("ATL2018").await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_camp_is_not_found() {
        let mut mock_repo = MockCampRepository::new();

        mock_repo
            .expect_find_camp()
            .times(1)
            .returning(|_, _| Ok(None));
        mock_repo.expect_delete_camp().never();

        let service = CampService::new(Arc::new(mock_repo));

        let result = service.delete_camp("NOPE").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
