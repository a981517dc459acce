use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::AppState;

/// Headline numbers for the front-end dashboard panel.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub item_count: usize,
    pub total_quantity: u64,
    pub total_reserved: u64,
    pub audit_entries: usize,
}

pub async fn summary(State(state): State<AppState>) -> (StatusCode, Json<DashboardSummary>) {
    let inventory = state.inventory.read().await;
    let audit = state.audit.read().await;

    let summary = DashboardSummary {
        item_count: inventory.len(),
        total_quantity: inventory.total_quantity(),
        total_reserved: inventory.total_reserved(),
        audit_entries: audit.len(),
    };

    (StatusCode::OK, Json(summary))
}
