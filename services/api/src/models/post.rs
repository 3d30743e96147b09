//! Post payloads and the enriched feed row

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request for post creation
#[derive(Deserialize)]
pub struct CreatePostRequest {
    pub username: Option<String>,
    pub api_key: Option<String>,
    pub content: Option<String>,
    pub media_id: Option<i64>,
}

/// Request body carrying only credentials
///
/// Used by post deletion and the downvote toggle, whose target id travels in
/// the path.
#[derive(Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub api_key: Option<String>,
}

/// Query parameters for the feed
///
/// `offset` and `limit` arrive as raw strings: a malformed value must surface
/// as a 500, not as the framework's own deserialization rejection.
#[derive(Deserialize)]
pub struct FeedQuery {
    pub username: Option<String>,
    pub api_key: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
    pub dislikes_only: Option<String>,
}

/// Resolved feed parameters passed to the repository
#[derive(Debug, Clone)]
pub struct FeedParams {
    /// The authenticated caller, for the `downvoted` flag and dislikes filter
    pub viewer_id: i64,
    pub offset: i64,
    pub limit: i64,
    pub search: Option<String>,
    pub dislikes_only: bool,
}

/// One enriched row of the feed
#[derive(Debug, Clone, Serialize)]
pub struct FeedItem {
    pub id: i64,
    pub content: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub profile_picture: Option<String>,
    pub media: Option<String>,
    pub downvotes: i64,
    pub downvoted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
