//! API route configuration.
//!
//! Routes are grouped by the API versions they serve. Each group carries its
//! own version negotiation layer from [`crate::api::versioning`].

use crate::api::handlers::{
    create_camp_handler, create_speaker_handler, create_talk_handler, delete_camp_handler,
    delete_talk_handler, get_camp_handler, get_speaker_handler, get_talk_handler,
    list_camps_handler, list_speakers_handler, list_talks_handler, reload_config_handler,
    search_camps_handler, update_camp_handler, update_talk_handler,
};
use crate::api::versioning;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, options},
};

/// Camps endpoints, served as versions 1.1 and 2.0.
///
/// # Endpoints
///
/// - `GET    /camps`            - List camps
/// - `POST   /camps`            - Create a camp
/// - `GET    /camps/search`     - Camps held on a date
/// - `GET    /camps/{moniker}`  - One camp
/// - `PUT    /camps/{moniker}`  - Update a camp
/// - `DELETE /camps/{moniker}`  - Delete a camp and its talks
pub fn camp_routes() -> Router<AppState> {
    Router::new()
        .route("/camps", get(list_camps_handler).post(create_camp_handler))
        .route("/camps/search", get(search_camps_handler))
        .route(
            "/camps/{moniker}",
            get(get_camp_handler)
                .put(update_camp_handler)
                .delete(delete_camp_handler),
        )
}

/// Talks of a camp.
///
/// # Endpoints
///
/// - `GET    /camps/{moniker}/talks`       - List talks
/// - `POST   /camps/{moniker}/talks`       - Create a talk
/// - `GET    /camps/{moniker}/talks/{id}`  - One talk
/// - `PUT    /camps/{moniker}/talks/{id}`  - Update a talk
/// - `DELETE /camps/{moniker}/talks/{id}`  - Delete a talk
pub fn talk_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/camps/{moniker}/talks",
            get(list_talks_handler).post(create_talk_handler),
        )
        .route(
            "/camps/{moniker}/talks/{id}",
            get(get_talk_handler)
                .put(update_talk_handler)
                .delete(delete_talk_handler),
        )
}

/// - `GET  /speakers`       - List speakers
/// - `POST /speakers`       - Create a speaker
/// - `GET  /speakers/{id}`  - One speaker
pub fn speaker_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/speakers",
            get(list_speakers_handler).post(create_speaker_handler),
        )
        .route("/speakers/{id}", get(get_speaker_handler))
}

/// - `OPTIONS /operations/reloadconfig` - Reload configuration
pub fn operation_routes() -> Router<AppState> {
    Router::new().route("/operations/reloadconfig", options(reload_config_handler))
}

/// All API routes with version negotiation applied per group.
pub fn api_routes(state: AppState) -> Router<AppState> {
    let camps = camp_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        versioning::camps_layer,
    ));

    let standard = Router::new()
        .merge(talk_routes())
        .merge(speaker_routes())
        .merge(operation_routes())
        .route_layer(middleware::from_fn_with_state(
            state,
            versioning::standard_layer,
        ));

    Router::new().merge(camps).merge(standard)
}
