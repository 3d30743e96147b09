//! Media handler: de-duplicated upload

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use tracing::error;

use crate::{auth, error::ApiError, models::media::CreateMediaRequest, state::AppState};

/// Upload a media blob, de-duplicated by exact content equality
///
/// If a row with identical content already exists its id is returned and
/// nothing is inserted; otherwise the blob is stored and the fresh id
/// returned. Either way the caller sees the same shape of response.
pub async fn create_media(
    State(state): State<AppState>,
    Json(payload): Json<CreateMediaRequest>,
) -> Result<impl IntoResponse, ApiError> {
    auth::authenticate(
        &state.user_repository,
        payload.username.as_deref(),
        payload.api_key.as_deref(),
    )
    .await?;

    let base64 = payload.base64.ok_or(ApiError::MissingFields)?;

    let existing = state
        .media_repository
        .find_id_by_content(&base64)
        .await
        .map_err(|e| {
            error!("Failed to check for an existing blob: {}", e);
            ApiError::InternalServerError
        })?;

    let media_id = match existing {
        Some(id) => id,
        None => state.media_repository.create(&base64).await.map_err(|e| {
            error!("Failed to store media: {}", e);
            ApiError::InternalServerError
        })?,
    };

    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Media created", "id": media_id})),
    ))
}
