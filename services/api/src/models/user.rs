//! User entity and user-facing payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User entity
///
/// `password` is stored and compared in plain text and `api_key` rotates on
/// every login — both are part of the inherited API contract.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub api_key: Option<String>,
    pub dark_mode: bool,
    pub profanity_filter: bool,
    pub ui_scale: String,
    pub media_id: Option<i64>,
}

/// Request for user registration
///
/// All fields are required; absence maps to a 400 rather than a framework
/// rejection, so everything is optional at the serde layer.
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request for user login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Response for a successful login
#[derive(Serialize)]
pub struct LoginResponse {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub dark_mode: bool,
    pub profanity_filter: bool,
    pub ui_scale: String,
    pub profile_picture: Option<String>,
    pub api_key: String,
}

/// Request for user logout
#[derive(Deserialize)]
pub struct LogoutRequest {
    pub username: Option<String>,
    pub api_key: Option<String>,
}

/// Request for a password change
#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    pub username: Option<String>,
    pub api_key: Option<String>,
    pub password: Option<String>,
    pub new_password: Option<String>,
}

/// Request for a partial profile update
///
/// Absent fields keep their current values.
#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub api_key: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dark_mode: Option<bool>,
    pub profanity_filter: Option<bool>,
    pub ui_scale: Option<String>,
    pub profile_picture_media_id: Option<i64>,
}

/// Row of the debug-only user dump
///
/// Deliberately includes the plaintext password and the current API key.
#[derive(Serialize)]
pub struct UserSummary {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub dark_mode: bool,
    pub profanity_filter: bool,
    pub ui_scale: String,
    pub password: String,
    pub api_key: Option<String>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        UserSummary {
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            email: user.email,
            dark_mode: user.dark_mode,
            profanity_filter: user.profanity_filter,
            ui_scale: user.ui_scale,
            password: user.password,
            api_key: user.api_key,
        }
    }
}

/// Public profile subset returned by `/user/{id}`
#[derive(Serialize)]
pub struct PublicProfile {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub profile_picture: Option<String>,
}
