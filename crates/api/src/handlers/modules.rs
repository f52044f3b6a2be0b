//! Handlers for the learning-module catalog and per-user progress.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use questboard_core::catalog::AudienceRole;
use questboard_core::types::{DbId, Timestamp};
use questboard_db::models::module::{ModuleProgress, ModuleResponse, UpsertModuleProgress};
use questboard_db::repositories::ModuleRepo;

use crate::error::{AppError, AppResult};
use crate::response::SuccessBody;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query string for `GET /modules`.
#[derive(Debug, Deserialize)]
pub struct ModulesQuery {
    /// User role to filter the catalog by. Absent means the full catalog.
    pub role: Option<String>,
}

/// Request body for `POST /user-modules/progress`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRequest {
    pub user_id: Option<DbId>,
    pub module_id: Option<String>,
    pub progress: Option<i16>,
    pub last_opened_at: Option<Timestamp>,
}

#[derive(Debug, Serialize)]
pub struct ModuleListPayload {
    pub modules: Vec<ModuleResponse>,
}

#[derive(Debug, Serialize)]
pub struct ProgressListPayload {
    pub progress: Vec<ModuleProgress>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/modules?role=...
///
/// The catalog in the client's camelCase shape. A `role` filter narrows it
/// to the modules targeted at that role's audience.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ModulesQuery>,
) -> AppResult<Json<SuccessBody<ModuleListPayload>>> {
    let rows = match query.role.as_deref() {
        Some(role) => {
            ModuleRepo::list_for_audience(&state.pool, AudienceRole::for_user_role(role)).await?
        }
        None => ModuleRepo::list_all(&state.pool).await?,
    };
    let modules = rows.into_iter().map(ModuleResponse::from).collect();
    Ok(Json(SuccessBody::new(ModuleListPayload { modules })))
}

/// GET /api/user-modules/{user_id}
pub async fn user_progress(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<SuccessBody<ProgressListPayload>>> {
    let progress = ModuleRepo::progress_for_user(&state.pool, user_id).await?;
    Ok(Json(SuccessBody::new(ProgressListPayload { progress })))
}

/// POST /api/user-modules/progress
///
/// Upsert one progress row. Progress is clamped to 0..=100 and a missing
/// `lastOpenedAt` defaults to now.
pub async fn upsert_progress(
    State(state): State<AppState>,
    Json(input): Json<ProgressRequest>,
) -> AppResult<Json<Value>> {
    let (Some(user_id), Some(module_id)) =
        (input.user_id, input.module_id.filter(|m| !m.is_empty()))
    else {
        return Err(AppError::BadRequest(
            "userId and moduleId are required".into(),
        ));
    };

    ModuleRepo::upsert_progress(
        &state.pool,
        &UpsertModuleProgress {
            user_id,
            module_id,
            progress: input.progress.unwrap_or(0),
            last_opened_at: input.last_opened_at,
        },
    )
    .await?;

    Ok(Json(json!({ "success": true })))
}
