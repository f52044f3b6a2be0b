//! Handlers for the `/admin` resource. All routes require a bearer token.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use questboard_core::catalog::DEFAULT_MODULES;
use questboard_core::types::DbId;
use questboard_db::repositories::{ModuleRepo, TaskRepo, UserRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::SuccessBody;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One row of the admin user listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: DbId,
    pub email: String,
    pub role: String,
    pub task_count: i64,
    pub tasks: Vec<AdminTask>,
}

/// Abbreviated task view for the admin listing.
#[derive(Debug, Serialize)]
pub struct AdminTask {
    pub id: DbId,
    pub title: String,
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct UserListPayload {
    pub users: Vec<AdminUser>,
}

#[derive(Debug, Serialize)]
pub struct SeedPayload {
    pub inserted: usize,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/admin/all-users
///
/// Every user with an abbreviated view of their tasks.
pub async fn all_users(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<SuccessBody<UserListPayload>>> {
    let users = UserRepo::list(&state.pool).await?;

    let mut rows = Vec::with_capacity(users.len());
    for user in users {
        let tasks = TaskRepo::list_for_user(&state.pool, user.id).await?;
        rows.push(AdminUser {
            id: user.id,
            email: user.email,
            role: user.role,
            task_count: tasks.len() as i64,
            tasks: tasks
                .into_iter()
                .map(|t| AdminTask {
                    id: t.id,
                    title: t.title,
                    category: t.category,
                })
                .collect(),
        });
    }

    Ok(Json(SuccessBody::new(UserListPayload { users: rows })))
}

/// POST /api/admin/seed-modules
///
/// Upsert the built-in module catalog. Idempotent; safe to re-run after a
/// catalog change.
pub async fn seed_modules(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<SuccessBody<SeedPayload>>> {
    ModuleRepo::seed_defaults(&state.pool, &DEFAULT_MODULES).await?;
    tracing::info!(inserted = DEFAULT_MODULES.len(), "seeded module catalog");
    Ok(Json(SuccessBody::new(SeedPayload {
        inserted: DEFAULT_MODULES.len(),
    })))
}
