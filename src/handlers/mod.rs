pub mod issue;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::services::IssueService;

/// Shared state for all routes
#[derive(Clone)]
pub struct AppState {
    pub issue_service: Arc<IssueService>,
}

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/api/issues", get(issue::list_issues).post(issue::submit_issue))
        .route("/api/issues/search", post(issue::search_issues))
        .route("/api/issues/export", post(issue::export_issues))
        .route("/api/filters", get(issue::get_filter_options))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "Technical Issue Logger is running."
}
