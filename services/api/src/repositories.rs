//! Repositories for database operations

use anyhow::Result;
use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::info;

use crate::models::user::User;

pub mod downvote;
pub mod media;
pub mod post;

fn user_from_row(row: &PgRow) -> User {
    User {
        id: row.get("id"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        username: row.get("username"),
        email: row.get("email"),
        password: row.get("password"),
        api_key: row.get("api_key"),
        dark_mode: row.get("dark_mode"),
        profanity_filter: row.get("profanity_filter"),
        ui_scale: row.get("ui_scale"),
        media_id: row.get("media_id"),
    }
}

const USER_COLUMNS: &str = "id, first_name, last_name, username, email, password, api_key, \
                            dark_mode, profanity_filter, ui_scale, media_id";

/// User repository for database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user and return its assigned id
    pub async fn create(
        &self,
        first_name: &str,
        last_name: &str,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<i64> {
        info!("Creating new user: {}", username);

        let row = sqlx::query(
            r#"
            INSERT INTO users (first_name, last_name, username, email, password)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(username)
        .bind(email)
        .bind(password)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get("id"))
    }

    /// Find a user by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(user_from_row))
    }

    /// Find a user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(user_from_row))
    }

    /// Resolve a username/API-key pair to a user
    ///
    /// Exact string match on both columns. A NULL stored key never matches.
    pub async fn find_by_credentials(&self, username: &str, api_key: &str) -> Result<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1 AND api_key = $2"
        ))
        .bind(username)
        .bind(api_key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(user_from_row))
    }

    /// Find a user by id
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(user_from_row))
    }

    /// Get all users, debug dump ordering by id
    pub async fn get_all(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(user_from_row).collect())
    }

    /// Set or clear a user's API key
    pub async fn set_api_key(&self, id: i64, api_key: Option<&str>) -> Result<()> {
        sqlx::query("UPDATE users SET api_key = $2 WHERE id = $1")
            .bind(id)
            .bind(api_key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Set a user's password
    pub async fn set_password(&self, id: i64, password: &str) -> Result<()> {
        sqlx::query("UPDATE users SET password = $2 WHERE id = $1")
            .bind(id)
            .bind(password)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Persist the mutable profile fields of a user
    ///
    /// The caller merges partial-update payloads into the loaded row first.
    pub async fn update_profile(&self, user: &User) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET first_name = $2, last_name = $3, dark_mode = $4,
                profanity_filter = $5, ui_scale = $6, media_id = $7
            WHERE id = $1
            "#,
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.dark_mode)
        .bind(user.profanity_filter)
        .bind(&user.ui_scale)
        .bind(user.media_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Bad-word deny-list repository
#[derive(Clone)]
pub struct BadWordRepository {
    pool: PgPool,
}

impl BadWordRepository {
    /// Create a new bad-word repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get every word on the deny-list
    pub async fn words(&self) -> Result<Vec<String>> {
        let rows = sqlx::query("SELECT word FROM bad_words")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(|row| row.get("word")).collect())
    }
}
