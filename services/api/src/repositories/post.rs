//! Post repository for database operations

use anyhow::Result;
use sqlx::{PgPool, Row};
use tracing::info;

use crate::models::post::{FeedItem, FeedParams};

/// Post repository for database operations
#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new post repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new post and return its assigned id
    pub async fn create(&self, author_id: i64, content: &str, media_id: Option<i64>) -> Result<i64> {
        info!("Creating post for user {}", author_id);

        let row = sqlx::query(
            r#"
            INSERT INTO posts (content, author_id, media_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(content)
        .bind(author_id)
        .bind(media_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get("id"))
    }

    /// Check whether a post exists
    pub async fn exists(&self, id: i64) -> Result<bool> {
        let row = sqlx::query("SELECT EXISTS (SELECT 1 FROM posts WHERE id = $1) AS found")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get("found"))
    }

    /// Delete a post by id
    ///
    /// Returns false when no row matched. Downvotes go with it via cascade.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Fetch one page of the ranked feed
    ///
    /// Posts are ordered by their penalized timestamp: creation time minus
    /// one day per downvote, newest first, ties broken by id descending so
    /// the ordering stays deterministic. Heavily downvoted posts sink as if
    /// they had been posted earlier; they are never removed.
    pub async fn feed(&self, params: &FeedParams) -> Result<Vec<FeedItem>> {
        let rows = sqlx::query(
            r#"
            SELECT p.id, p.content, p.created_at, p.updated_at,
                   u.first_name, u.last_name, u.username,
                   pp.base64 AS profile_picture,
                   pm.base64 AS media,
                   COALESCE(dc.downvotes, 0) AS downvotes,
                   EXISTS (
                       SELECT 1 FROM downvotes d
                       WHERE d.post_id = p.id AND d.user_id = $1
                   ) AS downvoted
            FROM posts p
            JOIN users u ON u.id = p.author_id
            LEFT JOIN media pp ON pp.id = u.media_id
            LEFT JOIN media pm ON pm.id = p.media_id
            LEFT JOIN (
                SELECT post_id, COUNT(*) AS downvotes
                FROM downvotes
                GROUP BY post_id
            ) dc ON dc.post_id = p.id
            WHERE ($2::text IS NULL OR p.content ILIKE '%' || $2 || '%')
              AND (NOT $3 OR EXISTS (
                  SELECT 1 FROM downvotes d
                  WHERE d.post_id = p.id AND d.user_id = $1
              ))
            ORDER BY p.created_at - COALESCE(dc.downvotes, 0) * INTERVAL '1 day' DESC,
                     p.id DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(params.viewer_id)
        .bind(params.search.as_deref())
        .bind(params.dislikes_only)
        .bind(params.limit)
        .bind(params.offset)
        .fetch_all(&self.pool)
        .await?;

        let items = rows
            .into_iter()
            .map(|row| FeedItem {
                id: row.get("id"),
                content: row.get("content"),
                first_name: row.get("first_name"),
                last_name: row.get("last_name"),
                username: row.get("username"),
                profile_picture: row.get("profile_picture"),
                media: row.get("media"),
                downvotes: row.get("downvotes"),
                downvoted: row.get("downvoted"),
                created_at: row.get("created_at"),
                updated_at: row.get("updated_at"),
            })
            .collect();

        Ok(items)
    }
}
