//! Integration tests for tool dispatch against a real database. These pin
//! the envelope shapes the model receives as tool results.

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use sqlx::PgPool;

use questboard_agent::dispatch::{dispatch, DispatchOutcome};
use questboard_core::catalog::DEFAULT_MODULES;
use questboard_db::models::module::UpsertModuleProgress;
use questboard_db::models::task::CreateTask;
use questboard_db::models::user::CreateUser;
use questboard_db::repositories::{ModuleRepo, TaskRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool, email: &str, role: &str) -> i64 {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: "$argon2id$dummy".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Nguyen".to_string(),
            employee_id: "E0058".to_string(),
            role: role.to_string(),
            department: "Engineering".to_string(),
            manager_name: "A. Chen".to_string(),
        },
    )
    .await
    .unwrap();
    user.id
}

async fn seed_task(pool: &PgPool, user_id: i64, title: &str, points: i32) -> i64 {
    let task = TaskRepo::create(
        pool,
        &CreateTask {
            user_id,
            title: title.to_string(),
            category: "Learning".to_string(),
            due_date: Utc::now() + Duration::days(7),
            points,
            is_mandatory: false,
        },
    )
    .await
    .unwrap();
    task.id
}

fn handled(outcome: DispatchOutcome) -> serde_json::Value {
    match outcome {
        DispatchOutcome::Handled(value) => value,
        other => panic!("expected Handled, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Dispatch plumbing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_tool_is_tagged_not_dropped(pool: PgPool) {
    let user_id = seed_user(&pool, "unknown@test.com", "Data Scientist").await;
    let outcome = dispatch(&pool, user_id, "summon_raise", "{}").await.unwrap();
    assert_matches!(outcome, DispatchOutcome::UnknownTool);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_arguments_are_tagged(pool: PgPool) {
    let user_id = seed_user(&pool, "malformed@test.com", "Data Scientist").await;

    let outcome = dispatch(&pool, user_id, "get_user_tasks", "{not json")
        .await
        .unwrap();
    assert_matches!(outcome, DispatchOutcome::MalformedArgs);

    // Required arguments missing counts as malformed too.
    let outcome = dispatch(&pool, user_id, "complete_task", "{}").await.unwrap();
    assert_matches!(outcome, DispatchOutcome::MalformedArgs);
    let outcome = dispatch(&pool, user_id, "create_learning_plan", "{}")
        .await
        .unwrap();
    assert_matches!(outcome, DispatchOutcome::MalformedArgs);
}

// ---------------------------------------------------------------------------
// Tool envelopes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_user_tasks_returns_overview_envelope(pool: PgPool) {
    let user_id = seed_user(&pool, "tasks@test.com", "Data Scientist").await;
    seed_task(&pool, user_id, "first", 10).await;
    seed_task(&pool, user_id, "second", 20).await;

    let value = handled(dispatch(&pool, user_id, "get_user_tasks", "").await.unwrap());
    assert_eq!(value["success"], true);
    assert_eq!(value["data"]["total_count"], 2);
    assert_eq!(value["data"]["pending_count"], 2);
    assert_eq!(value["data"]["total_xp_earned"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn complete_task_awards_and_reports_xp(pool: PgPool) {
    let user_id = seed_user(&pool, "complete@test.com", "Data Scientist").await;
    let task_id = seed_task(&pool, user_id, "Finish setup", 40).await;

    let args = format!(r#"{{"taskId": "{task_id}"}}"#);
    let value = handled(dispatch(&pool, user_id, "complete_task", &args).await.unwrap());
    assert_eq!(value["success"], true);
    assert_eq!(value["task_completed"], "Finish setup");
    assert_eq!(value["xp_earned"], 40);
    assert_eq!(
        value["message"],
        "Successfully completed \"Finish setup\" and earned 40 XP!"
    );

    // Repeat completion comes back as a domain-level failure envelope.
    let value = handled(dispatch(&pool, user_id, "complete_task", &args).await.unwrap());
    assert_eq!(value["success"], false);
    assert_eq!(value["message"], "Task is already completed");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn complete_task_never_crosses_users(pool: PgPool) {
    let owner = seed_user(&pool, "owner@test.com", "Data Scientist").await;
    let caller = seed_user(&pool, "caller@test.com", "Data Scientist").await;
    let task_id = seed_task(&pool, owner, "private", 10).await;

    let args = format!(r#"{{"taskId": {task_id}}}"#);
    let value = handled(dispatch(&pool, caller, "complete_task", &args).await.unwrap());
    assert_eq!(value["success"], false);
    assert_eq!(value["message"], "Task not found or access denied");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_user_profile_shapes_display_fields(pool: PgPool) {
    let user_id = seed_user(&pool, "profile@test.com", "Data Scientist").await;

    let value = handled(dispatch(&pool, user_id, "get_user_profile", "{}").await.unwrap());
    assert_eq!(value["success"], true);
    assert_eq!(value["profile"]["name"], "Jo Nguyen");
    assert_eq!(value["profile"]["manager"], "A. Chen");
    assert_eq!(value["profile"]["level"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn recommendations_skip_finished_modules(pool: PgPool) {
    let user_id = seed_user(&pool, "recs@test.com", "Data Scientist").await;
    ModuleRepo::seed_defaults(&pool, &DEFAULT_MODULES).await.unwrap();

    let catalog = ModuleRepo::list_all(&pool).await.unwrap();
    let finished = catalog
        .iter()
        .find(|m| m.audience_role == "Data Scientist")
        .unwrap()
        .id
        .clone();
    ModuleRepo::upsert_progress(
        &pool,
        &UpsertModuleProgress {
            user_id,
            module_id: finished.clone(),
            progress: 100,
            last_opened_at: None,
        },
    )
    .await
    .unwrap();

    let value = handled(
        dispatch(&pool, user_id, "get_recommended_modules", r#"{"limit": 5}"#)
            .await
            .unwrap(),
    );
    assert_eq!(value["success"], true);
    let recs = value["recommendations"].as_array().unwrap();
    assert!(!recs.is_empty());
    for rec in recs {
        assert_ne!(rec["id"], serde_json::json!(finished));
        assert_eq!(rec["role"], "Data Scientist");
        assert!(rec["xpReward"].is_number());
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn trends_envelope_reports_the_requested_period(pool: PgPool) {
    let user_id = seed_user(&pool, "trends@test.com", "Data Scientist").await;
    let task_id = seed_task(&pool, user_id, "warmup", 25).await;
    let args = format!(r#"{{"taskId": {task_id}}}"#);
    handled(dispatch(&pool, user_id, "complete_task", &args).await.unwrap());

    let value = handled(
        dispatch(
            &pool,
            user_id,
            "analyze_performance_trends",
            r#"{"time_period": "2 weeks"}"#,
        )
        .await
        .unwrap(),
    );
    assert_eq!(value["success"], true);
    assert_eq!(value["analysis"]["period"], "2 weeks");
    assert_eq!(value["analysis"]["completion_rate"], 100);
    assert_eq!(value["analysis"]["total_xp_earned"], 25);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn role_benchmarks_exclude_the_caller(pool: PgPool) {
    let caller = seed_user(&pool, "me@test.com", "Data Scientist").await;
    let peer = seed_user(&pool, "peer@test.com", "Data Scientist").await;
    seed_user(&pool, "outsider@test.com", "Business Analyst").await;

    sqlx::query("UPDATE users SET current_xp = 500 WHERE id = $1")
        .bind(peer)
        .execute(&pool)
        .await
        .unwrap();

    let value = handled(
        dispatch(
            &pool,
            caller,
            "get_peer_benchmarks",
            r#"{"comparison_type": "role"}"#,
        )
        .await
        .unwrap(),
    );
    assert_eq!(value["success"], true);
    // One same-role peer; the caller and the analyst are not counted.
    assert_eq!(value["benchmarks"]["peer_count"], 1);
}
