//! Handlers for the talks of a camp.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use validator::Validate;

use super::created;
use crate::api::dto::TalkModel;
use crate::api::links;
use crate::api::mapping::{merge_talk, talk_to_model};
use crate::domain::entities::TalkFields;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the talks of a camp, speakers embedded.
///
/// # Endpoint
///
/// `GET /api/camps/{moniker}/talks`
pub async fn list_talks_handler(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
) -> Result<Json<Vec<TalkModel>>, AppError> {
    let talks = state.talk_service.list_talks(&moniker).await?;
    Ok(Json(talks.iter().map(talk_to_model).collect()))
}

/// # Endpoint
///
/// `GET /api/camps/{moniker}/talks/{id}`
///
/// # Errors
///
/// Returns 404 if the camp has no talk with this id.
pub async fn get_talk_handler(
    State(state): State<AppState>,
    Path((moniker, id)): Path<(String, i64)>,
) -> Result<Json<TalkModel>, AppError> {
    let talk = state.talk_service.get_talk(&moniker, id).await?;
    Ok(Json(talk_to_model(&talk)))
}

/// Creates a talk in a camp.
///
/// # Endpoint
///
/// `POST /api/camps/{moniker}/talks`
///
/// The body's `Speaker.SpeakerId` selects an existing speaker.
///
/// # Errors
///
/// Returns 400 if the model is invalid, the camp does not exist, no speaker
/// id is given, or the speaker does not exist.
pub async fn create_talk_handler(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
    Json(model): Json<TalkModel>,
) -> Result<Response, AppError> {
    model.validate()?;

    let talk = state
        .talk_service
        .create_talk(&moniker, TalkFields::from(&model), model.speaker_id())
        .await?;

    let location = links::talk_path(&moniker, talk.id);
    if location.is_none() {
        tracing::warn!(moniker = %moniker, talk_id = talk.id, "No canonical location for talk");
    }

    Ok(created(location, talk_to_model(&talk)))
}

/// Updates a talk.
///
/// # Endpoint
///
/// `PUT /api/camps/{moniker}/talks/{id}`
///
/// A `Speaker.SpeakerId` that resolves reassigns the talk; one that does not
/// resolve is ignored and the current speaker is kept.
///
/// # Errors
///
/// Returns 404 if the camp has no talk with this id.
/// Returns 400 if the model is invalid or nothing was saved.
pub async fn update_talk_handler(
    State(state): State<AppState>,
    Path((moniker, id)): Path<(String, i64)>,
    Json(model): Json<TalkModel>,
) -> Result<Json<TalkModel>, AppError> {
    model.validate()?;

    let talk = state
        .talk_service
        .update_talk(
            &moniker,
            id,
            |talk| merge_talk(&model, talk),
            model.speaker_id(),
        )
        .await?;

    Ok(Json(talk_to_model(&talk)))
}

/// # Endpoint
///
/// `DELETE /api/camps/{moniker}/talks/{id}`
///
/// # Errors
///
/// Returns 404 if the camp has no talk with this id.
pub async fn delete_talk_handler(
    State(state): State<AppState>,
    Path((moniker, id)): Path<(String, i64)>,
) -> Result<StatusCode, AppError> {
    state.talk_service.delete_talk(&moniker, id).await?;
    Ok(StatusCode::OK)
}
