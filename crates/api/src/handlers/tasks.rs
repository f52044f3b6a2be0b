//! Handlers for the `/tasks` resource.

use axum::extract::{Path, State};
use axum::Json;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use questboard_core::error::CoreError;
use questboard_core::tasks::{role_task_seeds, DEFAULT_DUE_IN_DAYS, DEFAULT_TASK_POINTS};
use questboard_core::types::{DbId, Timestamp};
use questboard_db::models::task::{CreateTask, Task, TaskOverview};
use questboard_db::repositories::task_repo::{CompleteOutcome, ToggleOutcome};
use questboard_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::response::SuccessBody;
use crate::state::AppState;

/// Number of role-specific tasks below which `update_role_tasks` reseeds.
const ROLE_TASK_THRESHOLD: i64 = 5;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /tasks/complete` and `POST /tasks/toggle`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskActionRequest {
    pub task_id: Option<DbId>,
    pub user_id: Option<DbId>,
}

impl TaskActionRequest {
    /// Both ids are required; missing either is a 400.
    fn ids(&self) -> AppResult<(DbId, DbId)> {
        match (self.task_id, self.user_id) {
            (Some(task_id), Some(user_id)) => Ok((task_id, user_id)),
            _ => Err(AppError::BadRequest(
                "taskId and userId are required".into(),
            )),
        }
    }
}

/// Request body for `POST /tasks/create`. Everything but `userId` and
/// `title` falls back to a default.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub user_id: Option<DbId>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub due_date: Option<Timestamp>,
    pub points: Option<i32>,
    pub is_mandatory: Option<bool>,
}

/// Request body for `POST /tasks/update-role-tasks`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleTasksRequest {
    pub user_id: Option<DbId>,
    pub role: Option<String>,
}

/// Payload for the task-list endpoint; matches the coaching agent's
/// `get_user_tasks` tool so both surfaces stay in sync.
#[derive(Debug, Serialize)]
pub struct TaskListPayload {
    pub data: TaskOverview,
}

#[derive(Debug, Serialize)]
pub struct TaskPayload {
    pub task: Task,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/tasks/{user_id}
///
/// Full task overview for a user: all/pending/completed/overdue partitions
/// plus derived counts and the next deadline.
pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<SuccessBody<TaskListPayload>>> {
    let tasks = TaskRepo::list_for_user(&state.pool, user_id).await?;
    let overview = TaskOverview::build(tasks, Utc::now());
    Ok(Json(SuccessBody::new(TaskListPayload { data: overview })))
}

/// POST /api/tasks/complete
///
/// Mark a task done and award its points. Responds 200 with
/// `success: false` (rather than an error status) when the task is missing
/// or already done, which is the shape the task board expects.
pub async fn complete(
    State(state): State<AppState>,
    Json(input): Json<TaskActionRequest>,
) -> AppResult<Json<Value>> {
    let (task_id, user_id) = input.ids()?;

    let body = match TaskRepo::complete(&state.pool, task_id, user_id).await? {
        CompleteOutcome::Completed { task, xp_awarded } => json!({
            "success": true,
            "task_completed": task.title,
            "xp_earned": xp_awarded,
            "message": format!(
                "Successfully completed \"{}\" and earned {} XP!",
                task.title, xp_awarded
            ),
        }),
        CompleteOutcome::NotFound => json!({
            "success": false,
            "message": "Task not found or access denied",
        }),
        CompleteOutcome::AlreadyCompleted => json!({
            "success": false,
            "message": "Task is already completed",
        }),
    };
    Ok(Json(body))
}

/// POST /api/tasks/toggle
///
/// Flip a task between todo and done. `points` carries the XP delta the
/// flip applied: positive on completion, negative on un-completion.
pub async fn toggle(
    State(state): State<AppState>,
    Json(input): Json<TaskActionRequest>,
) -> AppResult<Json<Value>> {
    let (task_id, user_id) = input.ids()?;

    match TaskRepo::toggle(&state.pool, task_id, user_id).await? {
        ToggleOutcome::Toggled { task, points_delta } => Ok(Json(json!({
            "success": true,
            "task": task,
            "points": points_delta,
        }))),
        ToggleOutcome::NotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        })),
    }
}

/// POST /api/tasks/create
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTaskRequest>,
) -> AppResult<Json<SuccessBody<TaskPayload>>> {
    let (Some(user_id), Some(title)) = (input.user_id, input.title.filter(|t| !t.is_empty()))
    else {
        return Err(AppError::BadRequest("userId and title are required".into()));
    };

    let task = TaskRepo::create(
        &state.pool,
        &CreateTask {
            user_id,
            title,
            category: input.category.unwrap_or_else(|| "Personal".into()),
            due_date: input
                .due_date
                .unwrap_or_else(|| Utc::now() + Duration::days(DEFAULT_DUE_IN_DAYS)),
            points: input.points.unwrap_or(DEFAULT_TASK_POINTS),
            is_mandatory: input.is_mandatory.unwrap_or(false),
        },
    )
    .await?;

    Ok(Json(SuccessBody::new(TaskPayload { task })))
}

/// DELETE /api/tasks/cleanup/{user_id}
pub async fn cleanup(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Value>> {
    let removed = TaskRepo::delete_all_for_user(&state.pool, user_id).await?;
    tracing::info!(user_id, removed, "cleaned up tasks");
    Ok(Json(json!({
        "success": true,
        "message": "All tasks cleaned up",
    })))
}

/// POST /api/tasks/update-role-tasks
///
/// Reseed the five role-specific onboarding tasks after a role change. A
/// user who already has a full set keeps it untouched; otherwise any stale
/// role tasks are replaced with the set for the new role.
pub async fn update_role_tasks(
    State(state): State<AppState>,
    Json(input): Json<UpdateRoleTasksRequest>,
) -> AppResult<Json<Value>> {
    let (Some(user_id), Some(role)) = (input.user_id, input.role.filter(|r| !r.is_empty())) else {
        return Err(AppError::BadRequest("userId and role are required".into()));
    };

    let existing = TaskRepo::count_role_tasks(&state.pool, user_id).await?;
    if existing >= ROLE_TASK_THRESHOLD {
        return Ok(Json(json!({
            "success": true,
            "tasks": [],
            "added": 0,
            "message": "User already has sufficient role tasks",
        })));
    }

    TaskRepo::delete_role_tasks(&state.pool, user_id).await?;
    let tasks = TaskRepo::insert_seeds(&state.pool, user_id, role_task_seeds(&role)).await?;
    let added = tasks.len();

    tracing::info!(user_id, role = %role, added, "reseeded role tasks");

    Ok(Json(json!({
        "success": true,
        "tasks": tasks,
        "added": added,
    })))
}
