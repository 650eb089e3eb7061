use axum::{
    Router,
    routing::{get, patch},
};
use tower_http::trace::TraceLayer;

use crate::db::SqliteStore;

pub mod maintenance;
pub mod report;

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: SqliteStore,
}

impl AppState {
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Billboard maintenance server is running." }))
        .route(
            "/api/maintenance",
            get(maintenance::list_maintenance).post(maintenance::create_maintenance),
        )
        .route(
            "/api/maintenance/{id}",
            patch(maintenance::update_maintenance).delete(maintenance::delete_maintenance),
        )
        .route("/api/billboards", get(maintenance::list_billboards))
        .route("/maintenance/summary", get(report::maintenance_summary))
        .route("/maintenance/report", get(report::maintenance_report))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
