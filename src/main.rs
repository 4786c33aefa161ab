// ==============================================================================
// main.rs - Image Validation Gateway Entry Point
// ==============================================================================
// Description: Axum web server for uploaded-image content verification
// Author: Matt Barham
// Created: 2026-03-02
// Modified: 2026-08-14
// Version: 1.0.0
// ==============================================================================

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, Method},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod detector;
mod handlers;
mod models;
mod scanner;
mod signatures;
mod validator;

use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    info!("Starting Image Validation Gateway v{}", env!("CARGO_PKG_VERSION"));

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;

    // Build router with all endpoints
    let app = build_router(&config);

    // Bind server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    info!("Validation gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    // Run server
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}

fn build_router(config: &Config) -> Router {
    // API routes
    let api_routes = Router::new()
        // Upload validation
        .route("/validate", post(handlers::validate_upload))
        // Health check (nested under /api/images for consistency)
        .route("/health", get(handlers::health_check));

    // Permissive CORS: the gateway is called cross-origin from the upload
    // client before any file is committed to storage. Headers are attached
    // on every response path, error responses included.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ]);

    // Combine all routes
    Router::new()
        .route("/", get(handlers::root))
        .nest("/api/images", api_routes)
        .layer(
            ServiceBuilder::new()
                // Request tracing
                .layer(TraceLayer::new_for_http())
                // Cross-origin access for the upload client
                .layer(cors)
                // Transport body cap, above the 5 MiB validation limit
                .layer(DefaultBodyLimit::max(config.body_limit)),
        )
}
