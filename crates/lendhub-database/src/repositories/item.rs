//! Item repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use lendhub_core::error::{AppError, ErrorKind};
use lendhub_core::result::AppResult;
use lendhub_entity::item::{CreateItem, Item};

use crate::stores::ItemStore;

/// PostgreSQL-backed [`ItemStore`].
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for ItemRepository {
    async fn create(&self, data: &CreateItem) -> AppResult<Item> {
        sqlx::query_as::<_, Item>(
            "INSERT INTO items (owner_id, name, description, available) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.owner_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.available)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create item", e))
    }

    async fn update(&self, item: &Item) -> AppResult<Item> {
        sqlx::query_as::<_, Item>(
            "UPDATE items SET name = $2, description = $3, available = $4 \
             WHERE id = $1 RETURNING *",
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.available)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update item", e))?
        .ok_or_else(|| AppError::not_found(format!("Item {} not found", item.id)))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete item", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>("SELECT * FROM items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find item by id", e))
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Item>> {
        sqlx::query_as::<_, Item>(
            "SELECT * FROM items WHERE owner_id = $1 ORDER BY created_at ASC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list owner items", e))
    }

    async fn search_available(&self, text: &str) -> AppResult<Vec<Item>> {
        sqlx::query_as::<_, Item>(
            "SELECT * FROM items WHERE available = TRUE \
             AND (name ILIKE '%' || $1 || '%' OR description ILIKE '%' || $1 || '%') \
             ORDER BY created_at ASC",
        )
        .bind(text)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search items", e))
    }
}
