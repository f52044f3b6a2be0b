//! Handlers for registration and login.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use questboard_core::directory::lookup_employee;
use questboard_core::error::CoreError;
use questboard_core::tasks::role_task_seeds;
use questboard_db::models::user::{CreateUser, UserResponse};
use questboard_db::repositories::{TaskRepo, UserRepo};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::response::SuccessBody;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/register`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "Employee id is required"))]
    pub employee_id: String,
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for both register and login: the safe user view plus a bearer
/// token for subsequent authenticated calls.
#[derive(Debug, Serialize)]
pub struct AuthPayload {
    pub user: UserResponse,
    pub token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/register
///
/// Create an account, denormalize department/manager from the employee
/// directory, and seed the five role-specific onboarding tasks.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<Json<SuccessBody<AuthPayload>>> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let info = lookup_employee(&input.employee_id);
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email,
            password_hash,
            first_name: input.first_name,
            last_name: input.last_name,
            employee_id: input.employee_id,
            role: input.role,
            department: info.department.to_string(),
            manager_name: info.manager.to_string(),
        },
    )
    .await?;

    TaskRepo::insert_seeds(&state.pool, user.id, role_task_seeds(&user.role)).await?;

    let token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, email = %user.email, "registered new user");

    Ok(Json(SuccessBody::new(AuthPayload {
        user: UserResponse::from(&user),
        token,
    })))
}

/// POST /api/login
///
/// Authenticate with email + password. Both an unknown email and a wrong
/// password produce the same 401 so the endpoint does not leak which
/// accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<SuccessBody<AuthPayload>>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid credentials".into())))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(SuccessBody::new(AuthPayload {
        user: UserResponse::from(&user),
        token,
    })))
}
