//! Route definitions for the `/tasks` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /{user_id}          -> list (task overview)
/// POST   /complete           -> complete
/// POST   /toggle             -> toggle
/// POST   /create             -> create
/// DELETE /cleanup/{user_id}  -> cleanup
/// POST   /update-role-tasks  -> update_role_tasks
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{user_id}", get(tasks::list))
        .route("/complete", post(tasks::complete))
        .route("/toggle", post(tasks::toggle))
        .route("/create", post(tasks::create))
        .route("/cleanup/{user_id}", delete(tasks::cleanup))
        .route("/update-role-tasks", post(tasks::update_role_tasks))
}
