use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    models::InventoryItem,
    AppState,
};

pub async fn list_inventory(State(state): State<AppState>) -> (StatusCode, Json<Vec<InventoryItem>>) {
    let items: Vec<InventoryItem> = state.inventory.read().await.list().cloned().collect();

    debug!(count = items.len(), "Listed inventory");

    (StatusCode::OK, Json(items))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<(StatusCode, Json<InventoryItem>)> {
    let item = state
        .inventory
        .read()
        .await
        .find(id)
        .cloned()
        .ok_or(AppError::NotFound)?;

    Ok((StatusCode::OK, Json(item)))
}
