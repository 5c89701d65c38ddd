//! Health check handlers

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tracing::warn;

use crate::{db, state::AppState};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match db::ping(state.db()).await {
        Ok(()) => "up",
        Err(e) => {
            warn!(error = %e, "Health check: database unreachable");
            "down"
        }
    };

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/healthcheck", get(health_check))
}
