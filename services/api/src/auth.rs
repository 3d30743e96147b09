//! API key generation and the shared credential check

use rand::RngCore;
use tracing::error;

use crate::{error::ApiError, models::user::User, repositories::UserRepository};

/// Number of random bytes behind one API key; rendered as 256 hex chars
pub const API_KEY_BYTES: usize = 128;

/// Generate a fresh API key
///
/// 128 bytes from the thread-local CSPRNG, hex-encoded. A new key is issued
/// on every login and the stored one is cleared on logout.
pub fn generate_api_key() -> String {
    let mut bytes = [0u8; API_KEY_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Resolve request credentials to a user
///
/// Absent fields map to a 400, an unresolved pair to a 401. Nearly every
/// handler goes through here before touching anything else.
pub async fn authenticate(
    users: &UserRepository,
    username: Option<&str>,
    api_key: Option<&str>,
) -> Result<User, ApiError> {
    let (username, api_key) = match (username, api_key) {
        (Some(username), Some(api_key)) => (username, api_key),
        _ => return Err(ApiError::MissingFields),
    };

    users
        .find_by_credentials(username, api_key)
        .await
        .map_err(|e| {
            error!("Credential lookup failed: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or(ApiError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_shape() {
        let key = generate_api_key();
        assert_eq!(key.len(), API_KEY_BYTES * 2);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(key.chars().all(|c| !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_api_keys_are_distinct() {
        let first = generate_api_key();
        let second = generate_api_key();
        assert_ne!(first, second);
    }
}
