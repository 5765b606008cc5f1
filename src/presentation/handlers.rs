// HTTP request handlers
use crate::presentation::app_state::AppState;
use crate::presentation::views;
use axum::{extract::State, response::Html};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// The dashboard page. A failed or empty fetch renders the empty state
/// rather than an error.
pub async fn dashboard_page(State(state): State<Arc<AppState>>) -> Html<String> {
    match state.dashboard_service.get_dashboard().await {
        Some(dashboard) => Html(views::render_dashboard(&dashboard)),
        None => Html(views::render_empty_state()),
    }
}
