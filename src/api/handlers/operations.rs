//! Handlers for operational endpoints.

use axum::{extract::State, http::StatusCode};

use crate::error::AppError;
use crate::state::AppState;

/// Reloads configuration from `.env` and the environment.
///
/// # Endpoint
///
/// `OPTIONS /api/operations/reloadconfig`
///
/// The reload runs on the blocking pool since it reads files. A failed reload
/// keeps the current configuration.
///
/// # Errors
///
/// Returns 500 if the new configuration cannot be loaded or is invalid.
pub async fn reload_config_handler(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let config = state.config.clone();

    let reloaded = tokio::task::spawn_blocking(move || config.reload())
        .await
        .map_err(AppError::internal)?
        .map_err(|e| AppError::internal(format!("Configuration reload failed: {e:#}")))?;

    tracing::info!(
        default_api_version = %reloaded.default_api_version,
        "Configuration reloaded"
    );

    Ok(StatusCode::OK)
}
