mod routes;
mod controllers;
mod services;
mod models;
mod api_docs;
mod shared_state;
mod config;
mod error;
mod telemetry;

use std::net::SocketAddr;
use anyhow::Context;
use axum::{Router, routing::get, response::Html};
use crate::routes::estimate_routes::estimate_routes;
use utoipa::OpenApi;
use utoipa_scalar::Scalar;
use crate::api_docs::ApiDoc;
use crate::shared_state::AppState;
use crate::config::Config;

use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    // 1. Load configuration
    let config = Config::load_or_default("config.json").context("failed to load configuration")?;
    tracing::info!(
        rounding = ?config.policy.rounding,
        subsidy_tiers = ?config.policy.subsidy_tiers,
        projection = config.policy.twenty_year_projection,
        payback_chart = config.presentation.payback_chart,
        "configuration loaded"
    );

    // 2. Shared, read-only state
    let server_port = config.server.port;
    let state = AppState::new(config);

    // 3. Start Axum HTTP server
    let app = Router::new()
        .nest("/api", estimate_routes(state))
        .route("/scalar", get(|| async {
            Html(Scalar::new(ApiDoc::openapi()).to_html())
        }))
        .fallback_service(ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], server_port));
    tracing::info!("Estimator listening on http://{}", addr);
    tracing::info!("Scalar UI: http://{}/scalar", addr);

    tokio::select! {
        result = axum_server::bind(addr).serve(app.into_make_service()) => {
            result.context("HTTP server failed")?;
        }
        () = telemetry::shutdown_signal() => {}
    }
    Ok(())
}
