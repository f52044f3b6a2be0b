//! Route definitions for the module catalog and per-user progress.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::modules;
use crate::state::AppState;

/// Routes mounted directly under `/api`.
///
/// ```text
/// GET  /modules                   -> list (optionally ?role=... filtered)
/// GET  /user-modules/{user_id}    -> user_progress
/// POST /user-modules/progress     -> upsert_progress
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/modules", get(modules::list))
        .route("/user-modules/{user_id}", get(modules::user_progress))
        .route("/user-modules/progress", post(modules::upsert_progress))
}
