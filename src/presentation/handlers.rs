// HTTP request handlers
use crate::domain::dataset::DatasetSource;
use crate::domain::filters::FilterSelection;
use crate::domain::sales::SalesRecord;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::infrastructure::plotly_mapper::chart_set_to_plotly;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct UploadRequest {
    pub contents: Option<String>,
    pub filename: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DatasetView<'a> {
    source: &'a DatasetSource,
    loaded_at: DateTime<Utc>,
    columns: &'a [String],
    records: &'a [SalesRecord],
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard page
pub async fn index() -> Html<&'static str> {
    Html(include_str!("static/index.html"))
}

/// Dropdown options for the active dataset
pub async fn get_options(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let dropdowns = state.upload_service.current_state().await;
    respond(&dropdowns, &headers).await
}

/// Accept a data-URL encoded CSV upload
pub async fn upload_csv(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<UploadRequest>,
) -> Response {
    let dropdowns = state
        .upload_service
        .handle_upload(request.contents.as_deref(), request.filename.as_deref())
        .await;
    respond(&dropdowns, &headers).await
}

/// Bar, pie and line figures for the selected filters
pub async fn get_charts(
    Query(selection): Query<FilterSelection>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let charts = state.chart_service.charts(&selection.normalized()).await;
    respond(&chart_set_to_plotly(&charts), &headers).await
}

/// Raw rows of the active dataset
pub async fn get_dataset(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let snapshot = state.repository.snapshot().await;
    let view = DatasetView {
        source: &snapshot.source,
        loaded_at: snapshot.loaded_at,
        columns: snapshot.table.columns(),
        records: snapshot.table.records(),
    };
    respond(&view, &headers).await
}

async fn respond<T: Serialize>(data: &T, headers: &HeaderMap) -> Response {
    match json_response(data, accepts_brotli(headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
