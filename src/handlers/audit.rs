use axum::{extract::State, http::StatusCode, Json};
use tracing::debug;

use crate::{models::AuditEntry, AppState};

pub async fn list_audit_log(State(state): State<AppState>) -> (StatusCode, Json<Vec<AuditEntry>>) {
    let entries = state.audit.read().await.list().to_vec();

    debug!(count = entries.len(), "Listed audit log");

    (StatusCode::OK, Json(entries))
}
