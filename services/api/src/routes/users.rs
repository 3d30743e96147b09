//! User handlers: registration, login/logout, password change, profile

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use tracing::{error, info};

use crate::{
    auth,
    error::ApiError,
    models::user::{
        ChangePasswordRequest, LoginRequest, LoginResponse, LogoutRequest, PublicProfile,
        RegisterRequest, UpdateUserRequest, UserSummary,
    },
    state::AppState,
};

/// Register a new user
///
/// Uniqueness is checked before the insert, in the same order the original
/// contract did: username first (409), then email (416).
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let first_name = payload.first_name.ok_or(ApiError::MissingFields)?;
    let last_name = payload.last_name.ok_or(ApiError::MissingFields)?;
    let username = payload.username.ok_or(ApiError::MissingFields)?;
    let email = payload.email.ok_or(ApiError::MissingFields)?;
    let password = payload.password.ok_or(ApiError::MissingFields)?;

    let users = &state.user_repository;

    let by_username = users.find_by_username(&username).await.map_err(|e| {
        error!("Failed to check username uniqueness: {}", e);
        ApiError::InternalServerError
    })?;
    if by_username.is_some() {
        return Err(ApiError::UsernameTaken);
    }

    let by_email = users.find_by_email(&email).await.map_err(|e| {
        error!("Failed to check email uniqueness: {}", e);
        ApiError::InternalServerError
    })?;
    if by_email.is_some() {
        return Err(ApiError::EmailTaken);
    }

    users
        .create(&first_name, &last_name, &username, &email, &password)
        .await
        .map_err(|e| {
            error!("Failed to create user: {}", e);
            ApiError::InternalServerError
        })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "User created"})),
    ))
}

/// Log a user in, rotating their API key
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let username = payload.username.ok_or(ApiError::MissingFields)?;
    let password = payload.password.ok_or(ApiError::MissingFields)?;

    info!("Login attempt for user: {}", username);

    let user = state
        .user_repository
        .find_by_username(&username)
        .await
        .map_err(|e| {
            error!("Failed to look up user: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or(ApiError::NotFound("User"))?;

    // Plaintext comparison, inherited contract
    if user.password != password {
        return Err(ApiError::IncorrectPassword);
    }

    let api_key = auth::generate_api_key();
    state
        .user_repository
        .set_api_key(user.id, Some(&api_key))
        .await
        .map_err(|e| {
            error!("Failed to rotate API key: {}", e);
            ApiError::InternalServerError
        })?;

    let profile_picture = match user.media_id {
        Some(media_id) => state
            .media_repository
            .find_base64_by_id(media_id)
            .await
            .map_err(|e| {
                error!("Failed to fetch profile picture: {}", e);
                ApiError::InternalServerError
            })?,
        None => None,
    };

    Ok(Json(LoginResponse {
        first_name: user.first_name,
        last_name: user.last_name,
        username: user.username,
        dark_mode: user.dark_mode,
        profanity_filter: user.profanity_filter,
        ui_scale: user.ui_scale,
        profile_picture,
        api_key,
    }))
}

/// Log a user out, clearing their API key
pub async fn logout(
    State(state): State<AppState>,
    Json(payload): Json<LogoutRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = auth::authenticate(
        &state.user_repository,
        payload.username.as_deref(),
        payload.api_key.as_deref(),
    )
    .await?;

    state
        .user_repository
        .set_api_key(user.id, None)
        .await
        .map_err(|e| {
            error!("Failed to clear API key: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(json!({"message": "User logged out"})))
}

/// Change a user's password
///
/// Requires the current password to match in addition to valid credentials.
pub async fn change_password(
    State(state): State<AppState>,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = auth::authenticate(
        &state.user_repository,
        payload.username.as_deref(),
        payload.api_key.as_deref(),
    )
    .await?;

    let password = payload.password.ok_or(ApiError::MissingFields)?;
    let new_password = payload.new_password.ok_or(ApiError::MissingFields)?;

    if user.password != password {
        return Err(ApiError::IncorrectPassword);
    }

    state
        .user_repository
        .set_password(user.id, &new_password)
        .await
        .map_err(|e| {
            error!("Failed to update password: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(json!({"message": "Password updated"})))
}

/// Partially update the caller's profile
///
/// Absent fields keep their stored values; the merge happens here, against
/// the row the credential check already loaded.
pub async fn update_user(
    State(state): State<AppState>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut user = auth::authenticate(
        &state.user_repository,
        payload.username.as_deref(),
        payload.api_key.as_deref(),
    )
    .await?;

    if let Some(first_name) = payload.first_name {
        user.first_name = first_name;
    }
    if let Some(last_name) = payload.last_name {
        user.last_name = last_name;
    }
    if let Some(dark_mode) = payload.dark_mode {
        user.dark_mode = dark_mode;
    }
    if let Some(profanity_filter) = payload.profanity_filter {
        user.profanity_filter = profanity_filter;
    }
    if let Some(ui_scale) = payload.ui_scale {
        user.ui_scale = ui_scale;
    }
    if let Some(media_id) = payload.profile_picture_media_id {
        user.media_id = Some(media_id);
    }

    state
        .user_repository
        .update_profile(&user)
        .await
        .map_err(|e| {
            error!("Failed to update user: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(json!({"message": "User updated"})))
}

/// Full dump of all users — debug only
///
/// Returns plaintext passwords and API keys, exactly as the inherited
/// contract does.
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users = state.user_repository.get_all().await.map_err(|e| {
        error!("Failed to list users: {}", e);
        ApiError::InternalServerError
    })?;

    let summaries: Vec<UserSummary> = users.into_iter().map(UserSummary::from).collect();

    Ok(Json(summaries))
}

/// Public profile subset for one user
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .user_repository
        .find_by_id(id)
        .await
        .map_err(|e| {
            error!("Failed to get user: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or(ApiError::NotFound("User"))?;

    let profile_picture = match user.media_id {
        Some(media_id) => state
            .media_repository
            .find_base64_by_id(media_id)
            .await
            .map_err(|e| {
                error!("Failed to fetch profile picture: {}", e);
                ApiError::InternalServerError
            })?,
        None => None,
    };

    Ok(Json(PublicProfile {
        first_name: user.first_name,
        last_name: user.last_name,
        username: user.username,
        profile_picture,
    }))
}
