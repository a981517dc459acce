use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod audit;
mod config;
mod error;
mod handlers;
mod models;
mod seed;
mod store;
mod transactions;

use crate::audit::AuditLog;
use crate::config::Config;
use crate::store::InventoryStore;

/// Shared application state, cheap to clone (all heap behind Arc).
///
/// Writers lock `inventory` before `audit`.
#[derive(Clone)]
pub struct AppState {
    pub inventory: Arc<RwLock<InventoryStore>>,
    pub audit: Arc<RwLock<AuditLog>>,
}

impl AppState {
    pub fn new(inventory: InventoryStore) -> Self {
        Self {
            inventory: Arc::new(RwLock::new(inventory)),
            audit: Arc::new(RwLock::new(AuditLog::new())),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_inventory())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,inventory_loans=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let app = build_router(AppState::seeded());

    let addr = config.addr();
    info!("Inventory System backend listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Liveness ────────────────────────────────────────────────────────
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))

        // ── Inventory ───────────────────────────────────────────────────────
        .route("/inventory", get(handlers::inventory::list_inventory))
        .route("/inventory/:id", get(handlers::inventory::get_item))
        .route("/dashboard", get(handlers::dashboard::summary))

        // ── Transactions ────────────────────────────────────────────────────
        .route("/loan", post(handlers::transactions::loan_item))
        .route("/return", post(handlers::transactions::return_item))
        .route("/audit-log", get(handlers::audit::list_audit_log))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
