// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_charts, get_dataset, get_options, health_check, index, upload_csv,
};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/api/options", get(get_options))
        .route("/api/upload", post(upload_csv))
        .route("/api/charts", get(get_charts))
        .route("/api/dataset", get(get_dataset))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
