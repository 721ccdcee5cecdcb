use axum::extract::{Path, State};
use axum::Json;
use tripr_common::types::{StatusResponse, UserPreferences};
use tripr_store::preferences::repositories::PreferencesRepository;

use crate::error::ApiError;
use crate::AppState;

/// Unknown users get the empty profile rather than a 404.
pub async fn get_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserPreferences>, ApiError> {
    let prefs = PreferencesRepository::get(&state.preferences_repo, &user_id)
        .await?
        .unwrap_or_default();
    Ok(Json(prefs))
}

pub async fn save_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(prefs): Json<UserPreferences>,
) -> Result<Json<StatusResponse>, ApiError> {
    PreferencesRepository::save(&state.preferences_repo, &user_id, prefs).await?;
    Ok(Json(StatusResponse {
        success: true,
        message: Some("Preferences saved".to_owned()),
    }))
}
