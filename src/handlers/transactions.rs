use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;
use tracing::{info, warn};

use crate::{
    error::AppResult,
    models::{LoanRequest, ReturnRequest},
    transactions, AppState,
};

// ── Loan ──────────────────────────────────────────────────────────────────────

pub async fn loan_item(
    State(state): State<AppState>,
    Json(req): Json<LoanRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    // Lock order: inventory, then audit. Both are held until the entry lands.
    let mut inventory = state.inventory.write().await;
    let mut audit = state.audit.write().await;

    let entry = transactions::loan(&mut inventory, &mut audit, &req).map_err(|err| {
        warn!(item_id = req.item_id, quantity = req.quantity, error = %err, "Loan rejected");
        err
    })?;

    info!(
        action = entry.action(),
        item_id = req.item_id,
        item = %entry.item(),
        quantity = entry.quantity(),
        to = %entry.location(),
        "Item loaned"
    );

    Ok((StatusCode::OK, Json(json!({ "message": "Item loaned" }))))
}

// ── Return ────────────────────────────────────────────────────────────────────

pub async fn return_item(
    State(state): State<AppState>,
    Json(req): Json<ReturnRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let mut inventory = state.inventory.write().await;
    let mut audit = state.audit.write().await;

    let entry = transactions::return_item(&mut inventory, &mut audit, &req).map_err(|err| {
        warn!(item_id = req.item_id, quantity = req.quantity, error = %err, "Return rejected");
        err
    })?;

    info!(
        action = entry.action(),
        item_id = req.item_id,
        item = %entry.item(),
        quantity = entry.quantity(),
        from = %entry.location(),
        "Item returned"
    );

    Ok((StatusCode::OK, Json(json!({ "message": "Item returned" }))))
}
