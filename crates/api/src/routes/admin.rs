//! Route definitions for the `/admin` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. Handlers require a bearer token.
///
/// ```text
/// GET  /all-users     -> all_users
/// POST /seed-modules  -> seed_modules
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all-users", get(admin::all_users))
        .route("/seed-modules", post(admin::seed_modules))
}
