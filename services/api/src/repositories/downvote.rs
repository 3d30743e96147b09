//! Downvote repository for database operations

use anyhow::Result;
use sqlx::PgPool;

/// Downvote repository for database operations
///
/// A downvote is the pair (post_id, user_id); both transitions of the toggle
/// are idempotent at this layer.
#[derive(Clone)]
pub struct DownvoteRepository {
    pool: PgPool,
}

impl DownvoteRepository {
    /// Create a new downvote repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a downvote; repeating an existing one is a no-op
    pub async fn add(&self, post_id: i64, user_id: i64) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO downvotes (post_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (post_id, user_id) DO NOTHING
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove a downvote, returning whether one existed
    pub async fn remove(&self, post_id: i64, user_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM downvotes WHERE post_id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
