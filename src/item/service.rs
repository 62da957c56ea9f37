// src/item/service.rs
// Validation, normalization and the not-found policy for items

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

use super::store::{ItemRepository, StoreError};
use super::types::{Item, ItemRecord, NewItem, UpdateItem};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl ItemError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Logs the storage cause and returns a message that does not leak it.
    fn internal(operation: &str, cause: impl std::fmt::Display) -> Self {
        let message = format!("Failed to {operation}");
        error!("{}: {}", message, cause);
        Self::Internal(message)
    }
}

pub type ItemResult<T> = Result<T, ItemError>;

/// The five item operations exposed to the HTTP layer.
#[async_trait]
pub trait ItemApi: Send + Sync {
    async fn create_item(&self, req: NewItem) -> ItemResult<Item>;
    async fn get_item(&self, id: i64) -> ItemResult<Item>;
    async fn list_items(&self) -> ItemResult<Vec<Item>>;
    async fn update_item(&self, id: i64, req: UpdateItem) -> ItemResult<Item>;
    async fn delete_item(&self, id: i64) -> ItemResult<()>;
}

/// Field checks shared by create and update. Runs before any storage access.
pub fn validate(record: &ItemRecord) -> ItemResult<()> {
    if record.name.is_empty() {
        return Err(ItemError::validation("name", "Name is required"));
    }
    if record.priority <= 0 {
        return Err(ItemError::validation(
            "priority",
            "Priority must be a positive integer",
        ));
    }
    Ok(())
}

#[derive(Clone)]
pub struct ItemService {
    repo: Arc<dyn ItemRepository>,
}

impl ItemService {
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ItemApi for ItemService {
    async fn create_item(&self, req: NewItem) -> ItemResult<Item> {
        let record = ItemRecord::from(req);
        validate(&record)?;

        let id = self
            .repo
            .create(&record)
            .await
            .map_err(|e| ItemError::internal("create item", e))?;

        info!(id, name = %record.name, "Created item");
        Ok(record.into_item(id))
    }

    async fn get_item(&self, id: i64) -> ItemResult<Item> {
        match self.repo.get_by_id(id).await {
            Ok(item) => Ok(item),
            Err(StoreError::NotFound) => Err(ItemError::not_found("Item not found")),
            Err(e) => Err(ItemError::internal("retrieve item", e)),
        }
    }

    async fn list_items(&self) -> ItemResult<Vec<Item>> {
        let items = self
            .repo
            .list()
            .await
            .map_err(|e| ItemError::internal("list items", e))?;

        debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    async fn update_item(&self, id: i64, req: UpdateItem) -> ItemResult<Item> {
        let record = ItemRecord::from(req);
        validate(&record)?;

        let affected = self
            .repo
            .update(id, &record)
            .await
            .map_err(|e| ItemError::internal("update item", e))?;

        if affected == 0 {
            return Err(ItemError::not_found("Item not found to update"));
        }

        // The write is durable at this point; a failed read is still reported as internal.
        let item = self.repo.get_by_id(id).await.map_err(|e| {
            error!(id, "Item updated, but confirmation read failed: {}", e);
            ItemError::Internal("Item updated, but failed to retrieve confirmation".to_string())
        })?;

        info!(id, "Updated item");
        Ok(item)
    }

    async fn delete_item(&self, id: i64) -> ItemResult<()> {
        let affected = self
            .repo
            .delete(id)
            .await
            .map_err(|e| ItemError::internal("delete item", e))?;

        if affected == 0 {
            return Err(ItemError::not_found("Item not found to delete"));
        }

        info!(id, "Deleted item");
        Ok(())
    }
}
