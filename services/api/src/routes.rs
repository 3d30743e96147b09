//! API service routes

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{delete, get, patch, post, put},
};
use serde_json::json;

use crate::{error::ApiError, state::AppState};

pub mod media;
pub mod posts;
pub mod users;

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(api_status))
        .route("/status/db", get(db_status))
        .route("/login", post(users::login))
        .route("/logout", post(users::logout))
        .route("/change_password", patch(users::change_password))
        .route(
            "/user",
            put(users::register)
                .patch(users::update_user)
                .get(users::list_users),
        )
        .route("/user/:id", get(users::get_user))
        .route("/post", put(posts::create_post).get(posts::get_feed))
        .route("/post/:id", delete(posts::delete_post))
        .route(
            "/post/downvote/:id",
            put(posts::add_downvote).delete(posts::remove_downvote),
        )
        .route("/media", put(media::create_media))
        .with_state(state)
}

/// Liveness endpoint
pub async fn api_status() -> impl IntoResponse {
    Json(json!({
        "message": "API is online"
    }))
}

/// Database liveness probe, `SELECT 1` behind the scenes
pub async fn db_status(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    match common::database::health_check(&state.db_pool).await {
        Ok(true) => Ok(Json(json!({
            "message": "Database is online"
        }))),
        _ => Err(ApiError::InternalServerError),
    }
}
