// src/api/mod.rs

pub mod error;
pub mod extract;
pub mod http;

// Re-export commonly used items for external convenience
pub use error::{ApiError, ApiResult};
pub use http::http_router;
