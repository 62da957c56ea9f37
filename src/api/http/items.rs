// src/api/http/items.rs
// Item handlers: decode requests, call the service, encode results

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::extract::{ItemId, JsonBody};
use crate::item::{NewItem, UpdateItem};
use crate::state::AppState;

pub async fn create_item_handler(
    State(app_state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<NewItem>,
) -> ApiResult<impl IntoResponse> {
    let item = app_state.items.create_item(payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn list_items_handler(
    State(app_state): State<Arc<AppState>>,
) -> ApiResult<impl IntoResponse> {
    let items = app_state.items.list_items().await?;
    Ok(Json(items))
}

pub async fn get_item_handler(
    State(app_state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> ApiResult<impl IntoResponse> {
    let item = app_state.items.get_item(id).await?;
    Ok(Json(item))
}

pub async fn update_item_handler(
    State(app_state): State<Arc<AppState>>,
    ItemId(id): ItemId,
    JsonBody(payload): JsonBody<UpdateItem>,
) -> ApiResult<impl IntoResponse> {
    let item = app_state.items.update_item(id, payload).await?;
    Ok(Json(item))
}

pub async fn delete_item_handler(
    State(app_state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> ApiResult<impl IntoResponse> {
    app_state.items.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
