// src/state.rs

use std::sync::Arc;

use crate::item::{ItemApi, ItemService, SqliteItemStore};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemApi>,
}

impl AppState {
    pub fn new(items: Arc<dyn ItemApi>) -> Self {
        Self { items }
    }

    /// Wire the SQLite store and item service onto a shared pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        let store = Arc::new(SqliteItemStore::new(pool));
        Self::new(Arc::new(ItemService::new(store)))
    }
}
