//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource. Handlers validate the
//! transfer model, call a service, and map the result back through
//! [`crate::api::mapping`].

pub mod camps;
pub mod health;
pub mod operations;
pub mod speakers;
pub mod talks;

pub use camps::{
    create_camp_handler, delete_camp_handler, get_camp_handler, list_camps_handler,
    search_camps_handler, update_camp_handler,
};
pub use health::health_handler;
pub use operations::reload_config_handler;
pub use speakers::{create_speaker_handler, get_speaker_handler, list_speakers_handler};
pub use talks::{
    create_talk_handler, delete_talk_handler, get_talk_handler, list_talks_handler,
    update_talk_handler,
};

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// `201 Created` with the JSON body and, when one could be derived, a
/// `Location` header.
pub(crate) fn created<T: Serialize>(location: Option<String>, body: T) -> Response {
    let mut response = (StatusCode::CREATED, Json(body)).into_response();

    if let Some(value) = location.and_then(|l| HeaderValue::from_str(&l).ok()) {
        response.headers_mut().insert(header::LOCATION, value);
    }

    response
}
