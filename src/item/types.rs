// src/item/types.rs

use serde::{Deserialize, Serialize};

/// A persisted item, as returned to API callers.
///
/// `description` is never null on output; rows written without one hold `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub priority: i32,
}

// Request types for API

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub priority: i32,
}

/// Full replacement payload for `PUT /items/{id}`. There is no partial patch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateItem {
    pub name: String,
    pub description: Option<String>,
    pub priority: i32,
}

/// Validated column values for an insert or a wholesale replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    pub name: String,
    pub description: String,
    pub priority: i32,
}

impl ItemRecord {
    /// Normalizes an absent description to the empty string.
    pub fn new(name: String, description: Option<String>, priority: i32) -> Self {
        Self {
            name,
            description: description.unwrap_or_default(),
            priority,
        }
    }

    pub fn into_item(self, id: i64) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            priority: self.priority,
        }
    }
}

impl From<NewItem> for ItemRecord {
    fn from(req: NewItem) -> Self {
        Self::new(req.name, req.description, req.priority)
    }
}

impl From<UpdateItem> for ItemRecord {
    fn from(req: UpdateItem) -> Self {
        Self::new(req.name, req.description, req.priority)
    }
}

/// Error body shared by every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
