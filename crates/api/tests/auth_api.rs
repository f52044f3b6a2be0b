//! HTTP-level integration tests for registration and login.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn register_body(email: &str, employee_id: &str, role: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "password": "test_password_123!",
        "firstName": "Jo",
        "lastName": "Nguyen",
        "employeeId": employee_id,
        "role": role,
    })
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Registration resolves department/manager from the employee directory and
/// seeds five role-specific tasks.
#[sqlx::test(migrations = "../db/migrations")]
async fn register_resolves_directory_and_seeds_tasks(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(
        app,
        "/api/register",
        register_body("jo@test.com", "E0058", "Data Scientist"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["token"].is_string(), "response must contain a token");
    assert_eq!(json["user"]["department"], "Engineering");
    assert_eq!(json["user"]["manager_name"], "A. Chen");
    assert_eq!(json["user"]["level"], 1);
    assert_eq!(json["user"]["current_xp"], 0);
    assert!(
        json["user"]["password_hash"].is_null(),
        "password hash must never be serialized"
    );

    // Five role-specific tasks are seeded at registration.
    let user_id = json["user"]["id"].as_i64().unwrap();
    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM tasks WHERE user_id = $1 AND category IN ('Learning', 'Technical')",
    )
    .bind(user_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count, 5);
}

/// An employee id outside the directory falls back to General / TBD.
#[sqlx::test(migrations = "../db/migrations")]
async fn register_unknown_employee_falls_back_to_general(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/register",
        register_body("new@test.com", "E9999", "Business Analyst"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["user"]["department"], "General");
    assert_eq!(json["user"]["manager_name"], "TBD");
}

/// Registering the same email twice hits the unique constraint and maps
/// to 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn register_duplicate_email_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/register",
        register_body("dup@test.com", "E0058", "Data Scientist"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/register",
        register_body("dup@test.com", "E0059", "Business Analyst"),
    )
    .await;
    common::assert_error(response, StatusCode::CONFLICT, "CONFLICT").await;
}

/// A short password fails validation before touching the database.
#[sqlx::test(migrations = "../db/migrations")]
async fn register_rejects_short_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = register_body("short@test.com", "E0058", "Data Scientist");
    body["password"] = serde_json::json!("short");
    let response = post_json(app, "/api/register", body).await;

    common::assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Registered credentials log in and get a fresh token.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_success_returns_user_and_token(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/register",
        register_body("login@test.com", "E0059", "Business Analyst"),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/login",
        serde_json::json!({ "email": "login@test.com", "password": "test_password_123!" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["token"].is_string());
    assert_eq!(json["user"]["email"], "login@test.com");
    assert_eq!(json["user"]["department"], "Product");
}

/// A wrong password is a 401, not a hint about which part was wrong.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_wrong_password_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/register",
        register_body("wrongpw@test.com", "E0058", "Data Scientist"),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/login",
        serde_json::json!({ "email": "wrongpw@test.com", "password": "not_the_password" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid credentials");
}

/// An unknown email gets the same 401 as a wrong password.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_unknown_email_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/login",
        serde_json::json!({ "email": "ghost@test.com", "password": "whatever" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid credentials");
}
