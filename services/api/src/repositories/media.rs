//! Media repository for database operations

use anyhow::Result;
use sqlx::{PgPool, Row};
use tracing::info;

/// Media repository for database operations
#[derive(Clone)]
pub struct MediaRepository {
    pool: PgPool,
}

impl MediaRepository {
    /// Create a new media repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an existing row with exactly this content
    ///
    /// Storage is keyed by exact content equality: an upload whose blob
    /// already exists resolves to the stored row's id.
    pub async fn find_id_by_content(&self, base64: &str) -> Result<Option<i64>> {
        let row = sqlx::query("SELECT id FROM media WHERE base64 = $1 LIMIT 1")
            .bind(base64)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| row.get("id")))
    }

    /// Insert a new blob and return its assigned id
    pub async fn create(&self, base64: &str) -> Result<i64> {
        info!("Storing new media blob ({} bytes encoded)", base64.len());

        let row = sqlx::query(
            r#"
            INSERT INTO media (base64)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(base64)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get("id"))
    }

    /// Fetch a blob by id
    pub async fn find_base64_by_id(&self, id: i64) -> Result<Option<String>> {
        let row = sqlx::query("SELECT base64 FROM media WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| row.get("base64")))
    }
}
