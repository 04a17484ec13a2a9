//! Handlers for the camps resource.
//!
//! Versions 1.x and 2.x share every handler. The only difference is the
//! shape of the list response, selected by [`ListShape`].

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use validator::Validate;

use super::created;
use crate::api::dto::{CampListEnvelope, CampModel, IncludeTalksParams, SearchParams};
use crate::api::links;
use crate::api::mapping::{camp_from_model, camp_to_model, merge_camp};
use crate::api::versioning::ApiVersion;
use crate::domain::entities::Camp;
use crate::error::AppError;
use crate::state::AppState;

/// How a list of camps is rendered for a given API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListShape {
    /// Plain JSON array (1.x).
    Bare,
    /// `{"Count": n, "Results": [...]}` (2.x).
    Envelope,
}

impl ListShape {
    pub fn for_version(version: ApiVersion) -> Self {
        if version.major >= 2 {
            ListShape::Envelope
        } else {
            ListShape::Bare
        }
    }

    pub fn render(self, camps: Vec<CampModel>) -> Response {
        match self {
            ListShape::Bare => Json(camps).into_response(),
            ListShape::Envelope => Json(CampListEnvelope::from(camps)).into_response(),
        }
    }
}

fn unusable_moniker(moniker: &str) -> AppError {
    AppError::bad_request("Could not use current moniker", json!({"moniker": moniker}))
}

fn to_models(camps: &[Camp]) -> Vec<CampModel> {
    camps.iter().map(camp_to_model).collect()
}

/// Lists all camps.
///
/// # Endpoint
///
/// `GET /api/camps?includeTalks=false`
///
/// Version 1.x returns a bare array, 2.x wraps it in `{Count, Results}`.
pub async fn list_camps_handler(
    State(state): State<AppState>,
    Extension(version): Extension<ApiVersion>,
    Query(params): Query<IncludeTalksParams>,
) -> Result<Response, AppError> {
    let camps = state
        .camp_service
        .list_camps(params.include_talks())
        .await?;

    Ok(ListShape::for_version(version).render(to_models(&camps)))
}

/// Returns one camp.
///
/// # Endpoint
///
/// `GET /api/camps/{moniker}?includeTalks=false`
///
/// # Errors
///
/// Returns 404 if no camp has this moniker.
pub async fn get_camp_handler(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
    Query(params): Query<IncludeTalksParams>,
) -> Result<Json<CampModel>, AppError> {
    let camp = state
        .camp_service
        .get_camp(&moniker, params.include_talks())
        .await?;

    Ok(Json(camp_to_model(&camp)))
}

/// Finds the camps held on a date.
///
/// # Endpoint
///
/// `GET /api/camps/search?theDate=2018-10-18&includeTalks=false`
///
/// # Errors
///
/// Returns 404 if no camp is held on that date.
pub async fn search_camps_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<CampModel>>, AppError> {
    let camps = state
        .camp_service
        .search_by_date(params.the_date, params.include.include_talks())
        .await?;

    Ok(Json(to_models(&camps)))
}

/// Creates a camp.
///
/// # Endpoint
///
/// `POST /api/camps`
///
/// # Errors
///
/// Returns 400 if the model is invalid, the moniker is taken, the moniker
/// cannot form a URL, or nothing was saved.
pub async fn create_camp_handler(
    State(state): State<AppState>,
    Json(model): Json<CampModel>,
) -> Result<Response, AppError> {
    model.validate()?;

    state
        .camp_service
        .ensure_moniker_available(&model.moniker)
        .await?;

    let location =
        links::camp_path(&model.moniker).ok_or_else(|| unusable_moniker(&model.moniker))?;

    let camp = state
        .camp_service
        .create_camp(camp_from_model(&model))
        .await?;

    Ok(created(Some(location), camp_to_model(&camp)))
}

/// Replaces a camp's fields and location.
///
/// # Endpoint
///
/// `PUT /api/camps/{moniker}`
///
/// Talks sent in the body are ignored. A new moniker in the body renames the
/// camp and goes through the same checks as on create.
///
/// # Errors
///
/// Returns 404 if no camp has this moniker.
/// Returns 400 if the model is invalid, the new moniker is taken or cannot
/// form a URL, or nothing was saved.
pub async fn update_camp_handler(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
    Json(model): Json<CampModel>,
) -> Result<Json<CampModel>, AppError> {
    model.validate()?;

    if model.moniker != moniker {
        state.camp_service.get_camp(&moniker, false).await?;
        links::camp_path(&model.moniker).ok_or_else(|| unusable_moniker(&model.moniker))?;
        state
            .camp_service
            .ensure_moniker_available(&model.moniker)
            .await?;
    }

    let camp = state
        .camp_service
        .update_camp(&moniker, |camp| merge_camp(&model, camp))
        .await?;

    Ok(Json(camp_to_model(&camp)))
}

/// Deletes a camp and its talks.
///
/// # Endpoint
///
/// `DELETE /api/camps/{moniker}`
///
/// # Errors
///
/// Returns 404 if no camp has this moniker.
/// Returns 400 if nothing was deleted.
pub async fn delete_camp_handler(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
) -> Result<StatusCode, AppError> {
    state.camp_service.delete_camp(&moniker).await?;
    Ok(StatusCode::OK)
}
