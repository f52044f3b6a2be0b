use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Coaching capabilities advertised by the health descriptor.
const CAPABILITIES: [&str; 5] = [
    "Intelligent task analysis and recommendations",
    "Personalized learning plan creation",
    "Dynamic career guidance",
    "Contextual progress tracking",
    "Proactive coaching suggestions",
];

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Whether the coaching chat is enabled (a provider key is configured).
    pub chat_enabled: bool,
    /// What the coaching agent can do.
    pub capabilities: &'static [&'static str],
}

/// GET /health -- returns service and database health plus the coaching
/// capability descriptor.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = questboard_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        chat_enabled: state.coach.is_some(),
        capabilities: &CAPABILITIES,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
