pub mod admin;
pub mod auth;
pub mod chat;
pub mod health;
pub mod modules;
pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /register                        register (public)
/// /login                           login (public)
///
/// /tasks/{user_id}                 task overview
/// /tasks/complete                  complete a task, award XP
/// /tasks/toggle                    flip a task, move XP symmetrically
/// /tasks/create                    create a task
/// /tasks/cleanup/{user_id}         delete all of a user's tasks
/// /tasks/update-role-tasks         reseed role-specific tasks
///
/// /modules                         module catalog (?role= filtered)
/// /user-modules/{user_id}          per-user module progress
/// /user-modules/progress           upsert one progress row
///
/// /chat                            career-coach turn
///
/// /admin/all-users                 user listing with tasks (bearer token)
/// /admin/seed-modules              upsert built-in catalog (bearer token)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(modules::router())
        .merge(chat::router())
        .nest("/tasks", tasks::router())
        .nest("/admin", admin::router())
}
