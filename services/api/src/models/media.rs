//! Media payloads

use serde::Deserialize;

/// Request for a media upload
///
/// `base64` is the opaque encoded blob; uploads with identical content
/// resolve to the same stored row.
#[derive(Deserialize)]
pub struct CreateMediaRequest {
    pub username: Option<String>,
    pub api_key: Option<String>,
    pub base64: Option<String>,
}
