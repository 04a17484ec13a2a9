//! Handlers for the speakers resource.

use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use validator::Validate;

use super::created;
use crate::api::dto::SpeakerModel;
use crate::api::links;
use crate::api::mapping::{speaker_from_model, speaker_to_model};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/speakers`
pub async fn list_speakers_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<SpeakerModel>>, AppError> {
    let speakers = state.speaker_service.list_speakers().await?;
    Ok(Json(speakers.iter().map(speaker_to_model).collect()))
}

/// `GET /api/speakers/{id}`
pub async fn get_speaker_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SpeakerModel>, AppError> {
    let speaker = state.speaker_service.get_speaker(id).await?;
    Ok(Json(speaker_to_model(&speaker)))
}

/// Creates a speaker.
///
/// # Endpoint
///
/// `POST /api/speakers`
///
/// # Errors
///
/// Returns 400 if the names are missing or a URL field is malformed.
pub async fn create_speaker_handler(
    State(state): State<AppState>,
    Json(model): Json<SpeakerModel>,
) -> Result<Response, AppError> {
    model.validate()?;

    let speaker = state
        .speaker_service
        .create_speaker(speaker_from_model(model))
        .await?;

    Ok(created(
        Some(links::speaker_path(speaker.id)),
        speaker_to_model(&speaker),
    ))
}
