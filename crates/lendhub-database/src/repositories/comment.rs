//! Comment repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use lendhub_core::error::{AppError, ErrorKind};
use lendhub_core::result::AppResult;
use lendhub_entity::item::{Comment, CreateComment};

use crate::stores::CommentStore;

/// PostgreSQL-backed [`CommentStore`].
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentStore for CommentRepository {
    async fn create(&self, data: &CreateComment) -> AppResult<Comment> {
        sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (item_id, author_id, author_name, text, created) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.item_id)
        .bind(data.author_id)
        .bind(&data.author_name)
        .bind(&data.text)
        .bind(data.created)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create comment", e))
    }

    async fn find_by_item(&self, item_id: Uuid) -> AppResult<Vec<Comment>> {
        sqlx::query_as::<_, Comment>(
            "SELECT * FROM comments WHERE item_id = $1 ORDER BY created ASC",
        )
        .bind(item_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))
    }
}
