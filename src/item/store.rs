// src/item/store.rs
// Row-level CRUD against the `items` table

use async_trait::async_trait;
use sqlx::SqlitePool;
use thiserror::Error;

use super::types::{Item, ItemRecord};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no item row matched")]
    NotFound,
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// CRUD primitives for items.
///
/// Implementations only classify "zero rows" vs "driver failure". A write that
/// touches no row is reported through its affected count, not as an error.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Inserts a row and returns the store-assigned id.
    async fn create(&self, record: &ItemRecord) -> StoreResult<i64>;

    /// Fails with [`StoreError::NotFound`] when no row has this id.
    async fn get_by_id(&self, id: i64) -> StoreResult<Item>;

    async fn list(&self) -> StoreResult<Vec<Item>>;

    /// Replaces every mutable column. Returns the affected count (0 or 1).
    async fn update(&self, id: i64, record: &ItemRecord) -> StoreResult<u64>;

    /// Returns the affected count (0 or 1).
    async fn delete(&self, id: i64) -> StoreResult<u64>;
}

#[derive(Clone)]
pub struct SqliteItemStore {
    pool: SqlitePool,
}

impl SqliteItemStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ItemRepository for SqliteItemStore {
    async fn create(&self, record: &ItemRecord) -> StoreResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO items (name, description, priority)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&record.name)
        .bind(&record.description)
        .bind(record.priority)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Item> {
        sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, description, priority
            FROM items
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn list(&self) -> StoreResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, description, priority
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn update(&self, id: i64, record: &ItemRecord) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE items
            SET name = ?, description = ?, priority = ?
            WHERE id = ?
            "#,
        )
        .bind(&record.name)
        .bind(&record.description)
        .bind(record.priority)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
