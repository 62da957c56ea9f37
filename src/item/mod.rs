// src/item/mod.rs
pub mod service;
pub mod store;
pub mod types;

// Re-export for easy use elsewhere
pub use service::{ItemApi, ItemError, ItemResult, ItemService};
pub use store::{ItemRepository, SqliteItemStore, StoreError};
pub use types::{ErrorBody, Item, ItemRecord, NewItem, UpdateItem};
