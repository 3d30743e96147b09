//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the API service
///
/// Every variant maps to a JSON body of the shape `{"message": ...}` with
/// the status code the original API contract prescribes.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required request field was absent
    #[error("Missing required fields")]
    MissingFields,

    /// The username/api_key pair did not resolve to a user
    #[error("User API key not found")]
    Unauthorized,

    /// Password comparison failed on login or password change
    #[error("Incorrect password")]
    IncorrectPassword,

    /// A referenced resource did not resolve
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Username uniqueness violation on registration
    #[error("Username already taken")]
    UsernameTaken,

    /// Email uniqueness violation on registration
    ///
    /// The 416 status is a wart inherited from the original API contract.
    #[error("User already exists")]
    EmailTaken,

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized | ApiError::IncorrectPassword => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UsernameTaken => StatusCode::CONFLICT,
            ApiError::EmailTaken => StatusCode::RANGE_NOT_SATISFIABLE,
            ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_message(error: ApiError) -> (StatusCode, String) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, value["message"].as_str().unwrap().to_string())
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::MissingFields.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::IncorrectPassword.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("Post").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::UsernameTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::EmailTaken.status_code(),
            StatusCode::RANGE_NOT_SATISFIABLE
        );
        assert_eq!(
            ApiError::InternalServerError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_response_bodies() {
        tokio_test::block_on(async {
            let (status, message) = body_message(ApiError::Unauthorized).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(message, "User API key not found");

            let (status, message) = body_message(ApiError::NotFound("Post")).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(message, "Post not found");

            let (status, message) = body_message(ApiError::EmailTaken).await;
            assert_eq!(status.as_u16(), 416);
            assert_eq!(message, "User already exists");
        });
    }
}
