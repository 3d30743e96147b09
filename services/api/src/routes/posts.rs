//! Post handlers: creation, the ranked feed, deletion, downvote toggle

use std::collections::HashSet;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use tracing::error;

use crate::{
    auth,
    error::ApiError,
    models::post::{CreatePostRequest, CredentialsRequest, FeedParams, FeedQuery},
    profanity,
    state::AppState,
};

/// Feed page size when the caller does not ask for one
const DEFAULT_LIMIT: i64 = 10;
/// Hard cap on the feed page size
const MAX_LIMIT: i64 = 20;

/// Parse the feed offset: default 0, negatives treated as 0
///
/// A value that does not parse at all surfaces as a 500, matching the
/// inherited behavior of malformed filter values blowing up in the handler.
fn parse_offset(raw: Option<&str>) -> Result<i64, ApiError> {
    match raw {
        None => Ok(0),
        Some(raw) => raw
            .parse::<i64>()
            .map(|offset| offset.max(0))
            .map_err(|_| ApiError::InternalServerError),
    }
}

/// Parse the feed limit: default 10, clamped to [1, 20]
fn parse_limit(raw: Option<&str>) -> Result<i64, ApiError> {
    match raw {
        None => Ok(DEFAULT_LIMIT),
        Some(raw) => raw
            .parse::<i64>()
            .map(|limit| limit.clamp(1, MAX_LIMIT))
            .map_err(|_| ApiError::InternalServerError),
    }
}

/// Parse the dislikes-only flag: accepts true/false/1/0
fn parse_dislikes_only(raw: Option<&str>) -> Result<bool, ApiError> {
    match raw {
        None => Ok(false),
        Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(_) => Err(ApiError::InternalServerError),
    }
}

/// Create a new post
pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = auth::authenticate(
        &state.user_repository,
        payload.username.as_deref(),
        payload.api_key.as_deref(),
    )
    .await?;

    let content = payload.content.ok_or(ApiError::MissingFields)?;

    let post_id = state
        .post_repository
        .create(user.id, &content, payload.media_id)
        .await
        .map_err(|e| {
            error!("Failed to create post: {}", e);
            ApiError::InternalServerError
        })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Post created", "id": post_id})),
    ))
}

/// Fetch one page of the ranked feed
///
/// Posts sink one day in the ordering per downvote. When the caller has the
/// profanity filter enabled, deny-listed words in the returned content are
/// masked.
pub async fn get_feed(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let user = auth::authenticate(
        &state.user_repository,
        query.username.as_deref(),
        query.api_key.as_deref(),
    )
    .await?;

    let params = FeedParams {
        viewer_id: user.id,
        offset: parse_offset(query.offset.as_deref())?,
        limit: parse_limit(query.limit.as_deref())?,
        search: query.search,
        dislikes_only: parse_dislikes_only(query.dislikes_only.as_deref())?,
    };

    let mut items = state.post_repository.feed(&params).await.map_err(|e| {
        error!("Failed to fetch feed: {}", e);
        ApiError::InternalServerError
    })?;

    if user.profanity_filter {
        let bad_words: HashSet<String> = state
            .bad_word_repository
            .words()
            .await
            .map_err(|e| {
                error!("Failed to load the deny-list: {}", e);
                ApiError::InternalServerError
            })?
            .into_iter()
            .map(|word| word.to_lowercase())
            .collect();

        for item in &mut items {
            item.content = profanity::mask_content(&item.content, &bad_words);
        }
    }

    Ok(Json(items))
}

/// Delete a post by id
///
/// Any authenticated user may delete any post; there is no ownership check
/// in the inherited contract.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    auth::authenticate(
        &state.user_repository,
        payload.username.as_deref(),
        payload.api_key.as_deref(),
    )
    .await?;

    let deleted = state.post_repository.delete(id).await.map_err(|e| {
        error!("Failed to delete post: {}", e);
        ApiError::InternalServerError
    })?;

    if !deleted {
        return Err(ApiError::NotFound("Post"));
    }

    Ok(Json(json!({"message": "Post deleted"})))
}

/// Record a downvote on a post
///
/// Idempotent: repeating it for the same (post, user) pair is a no-op that
/// still reports success.
pub async fn add_downvote(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = auth::authenticate(
        &state.user_repository,
        payload.username.as_deref(),
        payload.api_key.as_deref(),
    )
    .await?;

    let exists = state.post_repository.exists(id).await.map_err(|e| {
        error!("Failed to check post: {}", e);
        ApiError::InternalServerError
    })?;
    if !exists {
        return Err(ApiError::NotFound("Post"));
    }

    state
        .downvote_repository
        .add(id, user.id)
        .await
        .map_err(|e| {
            error!("Failed to add downvote: {}", e);
            ApiError::InternalServerError
        })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Downvote added"})),
    ))
}

/// Remove a downvote from a post
///
/// Removing an absent downvote is a no-op success.
pub async fn remove_downvote(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = auth::authenticate(
        &state.user_repository,
        payload.username.as_deref(),
        payload.api_key.as_deref(),
    )
    .await?;

    let exists = state.post_repository.exists(id).await.map_err(|e| {
        error!("Failed to check post: {}", e);
        ApiError::InternalServerError
    })?;
    if !exists {
        return Err(ApiError::NotFound("Post"));
    }

    state
        .downvote_repository
        .remove(id, user.id)
        .await
        .map_err(|e| {
            error!("Failed to remove downvote: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(json!({"message": "Downvote removed"})))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_defaults_and_clamps() {
        assert_eq!(parse_offset(None).unwrap(), 0);
        assert_eq!(parse_offset(Some("25")).unwrap(), 25);
        assert_eq!(parse_offset(Some("-3")).unwrap(), 0);
        assert!(parse_offset(Some("abc")).is_err());
    }

    #[test]
    fn test_limit_defaults_and_clamps() {
        assert_eq!(parse_limit(None).unwrap(), 10);
        assert_eq!(parse_limit(Some("15")).unwrap(), 15);
        assert_eq!(parse_limit(Some("50")).unwrap(), 20);
        assert_eq!(parse_limit(Some("0")).unwrap(), 1);
        assert!(parse_limit(Some("ten")).is_err());
    }

    #[test]
    fn test_dislikes_only_flag() {
        assert!(!parse_dislikes_only(None).unwrap());
        assert!(parse_dislikes_only(Some("true")).unwrap());
        assert!(parse_dislikes_only(Some("1")).unwrap());
        assert!(!parse_dislikes_only(Some("false")).unwrap());
        assert!(!parse_dislikes_only(Some("0")).unwrap());
        assert!(parse_dislikes_only(Some("maybe")).is_err());
    }
}
