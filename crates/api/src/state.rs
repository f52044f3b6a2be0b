use std::sync::Arc;

use questboard_agent::CoachClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: questboard_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Completion-provider client; `None` when no API key is configured,
    /// which disables the chat endpoint.
    pub coach: Option<CoachClient>,
}
