// src/api/http/router.rs
// HTTP router composition for REST API endpoints

use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use super::{
    handlers::health_handler,
    items::{
        create_item_handler,
        delete_item_handler,
        get_item_handler,
        list_items_handler,
        update_item_handler,
    },
};

/// Item routes plus health, with request tracing.
pub fn http_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(health_handler))

        // Items
        .route("/items", get(list_items_handler).post(create_item_handler))
        .route(
            "/items/{id}",
            get(get_item_handler)
                .put(update_item_handler)
                .delete(delete_item_handler),
        )

        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
