// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floorplan-Lite Server - HTTP API for floorplan constraint masks and
//! generated-layout visualization.
//!
//! # Endpoints
//!
//! - `GET /` - API information
//! - `GET /api/v1/health` - Health check
//! - `POST /generate_masks` (alias `/api/v1/masks`) - Corner masks + base64 PNG heat maps
//! - `POST /plot_polygons` (alias `/api/v1/polygons`) - PNG of an uploaded `.npz` floorplan
//! - `POST /api/v1/polygons/json` - Decoded polygons from a JSON `houses` array

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

mod config;
mod error;
mod routes;
mod services;
mod types;

use config::Config;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Build the router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let max_body = state.config.max_upload_bytes();
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    Router::new()
        // Root endpoint - API information
        .route("/", get(routes::health::info))
        // Health check
        .route("/api/v1/health", get(routes::health::check))
        // Mask endpoints
        .route("/generate_masks", post(routes::masks::generate))
        .route("/api/v1/masks", post(routes::masks::generate))
        // Polygon endpoints
        .route("/plot_polygons", post(routes::polygons::plot))
        .route("/api/v1/polygons", post(routes::polygons::plot))
        .route("/api/v1/polygons/json", post(routes::polygons::decode_json))
        // Middleware
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,tower_http=debug,floorplan_lite_server=debug".into()),
        )
        .pretty()
        .init();

    let config = Config::from_env();

    tracing::info!(
        host = %config.host,
        port = config.port,
        max_upload_size_mb = config.max_upload_size_mb,
        request_timeout_secs = config.request_timeout_secs,
        canvas_size = config.canvas_size,
        mask_colormap = ?config.mask_colormap,
        "Starting Floorplan-Lite Server"
    );

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", config.host, config.port))?;

    let state = AppState {
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app(state)).await.context("server error")?;
    Ok(())
}
