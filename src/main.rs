// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_config;
use crate::infrastructure::warm_query_repository::WarmQueryRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard_page, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration (warm query endpoint, credential, bind address)
    let config = load_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(WarmQueryRepository::new(
        config.warm_query.endpoint,
        config.warm_query.token,
    ));

    // Create services (application layer)
    let dashboard_service = DashboardService::new(repository);

    // Create application state
    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(dashboard_page))
        .route("/healthz", get(health_check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.bind.parse()?;
    println!("Starting brewery-telemetry service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
