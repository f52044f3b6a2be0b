//! Maps model-issued tool calls onto task, module, and analytics handlers.
//!
//! Identity is always the authenticated caller passed in by the orchestrator;
//! handlers never read a user id out of tool arguments, so the chat channel
//! cannot be used to reach another user's data. Unknown tools and unparsable
//! arguments come back as tagged outcomes so the model can be told the call
//! failed instead of the call silently vanishing.

use chrono::{Duration, Utc};
use serde_json::{json, Value};
use sqlx::PgPool;
use tracing::warn;

use questboard_core::analytics::{action_plan, benchmarks, projection, skills, trends};
use questboard_core::analytics::{PeerStats, TaskSnapshot};
use questboard_core::catalog::AudienceRole;
use questboard_core::learning_plan;
use questboard_core::types::DbId;
use questboard_db::models::task::TaskOverview;
use questboard_db::models::user::{Profile, User};
use questboard_db::repositories::{ModuleRepo, TaskRepo, UserRepo};
use questboard_db::repositories::task_repo::CompleteOutcome;

use crate::error::AgentError;

const PROJECTION_WINDOW_DAYS: i64 = 90;

/// Result of dispatching one tool call.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The handler ran; the value is the JSON envelope to return to the model.
    Handled(Value),
    /// No handler is registered under the requested name.
    UnknownTool,
    /// The call's argument string was not valid JSON.
    MalformedArgs,
}

/// Execute `tool_name` with `raw_args` on behalf of `user_id`.
///
/// Database failures propagate as errors (the chat endpoint converts them to
/// its fixed apology); domain-level failures such as an unowned task come
/// back inside a `{"success": false, ...}` envelope.
pub async fn dispatch(
    pool: &PgPool,
    user_id: DbId,
    tool_name: &str,
    raw_args: &str,
) -> Result<DispatchOutcome, AgentError> {
    let Some(args) = parse_args(raw_args) else {
        warn!(tool = tool_name, "malformed tool arguments");
        return Ok(DispatchOutcome::MalformedArgs);
    };

    let value = match tool_name {
        "get_user_tasks" => get_user_tasks(pool, user_id).await?,
        "get_user_module_progress" => get_user_module_progress(pool, user_id).await?,
        "get_recommended_modules" => get_recommended_modules(pool, user_id, &args).await?,
        "complete_task" => match parse_task_id(&args) {
            Some(task_id) => complete_task(pool, user_id, task_id).await?,
            None => return Ok(DispatchOutcome::MalformedArgs),
        },
        "get_user_profile" => get_user_profile(pool, user_id).await?,
        "create_learning_plan" => match args["focus_area"].as_str() {
            Some(focus_area) => {
                create_learning_plan(pool, user_id, focus_area, args["timeframe"].as_str()).await?
            }
            None => return Ok(DispatchOutcome::MalformedArgs),
        },
        "analyze_performance_trends" => analyze_performance_trends(pool, user_id, &args).await?,
        "get_skill_gap_analysis" => get_skill_gap_analysis(pool, user_id, &args).await?,
        "create_action_plan" => match args["goal"].as_str() {
            Some(goal) => create_action_plan(pool, user_id, goal, &args).await?,
            None => return Ok(DispatchOutcome::MalformedArgs),
        },
        "get_peer_benchmarks" => get_peer_benchmarks(pool, user_id, &args).await?,
        "predict_career_outcomes" => predict_career_outcomes(pool, user_id, &args).await?,
        _ => {
            warn!(tool = tool_name, "unknown tool requested by model");
            return Ok(DispatchOutcome::UnknownTool);
        }
    };
    Ok(DispatchOutcome::Handled(value))
}

/// Empty argument strings count as an empty object; anything else must be
/// valid JSON.
fn parse_args(raw: &str) -> Option<Value> {
    if raw.trim().is_empty() {
        return Some(json!({}));
    }
    serde_json::from_str(raw).ok()
}

/// `taskId` is declared as a string in the catalog, but a numeric value from
/// a loose model is accepted too.
fn parse_task_id(args: &Value) -> Option<DbId> {
    match &args["taskId"] {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}

fn recommendation_limit(args: &Value) -> usize {
    let requested = args["limit"].as_f64().unwrap_or(3.0) as i64;
    requested.clamp(1, 5) as usize
}

fn user_not_found() -> Value {
    json!({ "success": false, "error": "User not found" })
}

async fn load_user(pool: &PgPool, user_id: DbId) -> Result<Option<User>, AgentError> {
    Ok(UserRepo::find_by_id(pool, user_id).await?)
}

async fn snapshots_since(
    pool: &PgPool,
    user_id: DbId,
    days: i64,
) -> Result<Vec<TaskSnapshot>, AgentError> {
    let since = Utc::now() - Duration::days(days);
    let tasks = TaskRepo::created_since(pool, user_id, since).await?;
    Ok(tasks.iter().map(|t| t.snapshot()).collect())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn get_user_tasks(pool: &PgPool, user_id: DbId) -> Result<Value, AgentError> {
    let tasks = TaskRepo::list_for_user(pool, user_id).await?;
    let overview = TaskOverview::build(tasks, Utc::now());
    Ok(json!({ "success": true, "data": overview }))
}

async fn get_user_module_progress(pool: &PgPool, user_id: DbId) -> Result<Value, AgentError> {
    let progress = ModuleRepo::progress_for_user(pool, user_id).await?;
    Ok(json!({ "success": true, "progress": progress }))
}

async fn get_recommended_modules(
    pool: &PgPool,
    user_id: DbId,
    args: &Value,
) -> Result<Value, AgentError> {
    let role = load_user(pool, user_id)
        .await?
        .map(|u| u.role)
        .unwrap_or_else(|| "Data Scientist".to_string());
    let audience = AudienceRole::for_user_role(&role);

    let catalog = ModuleRepo::list_for_audience(pool, audience).await?;
    let progress = ModuleRepo::progress_for_user(pool, user_id).await?;
    let finished: Vec<&str> = progress
        .iter()
        .filter(|p| p.progress >= 100)
        .map(|p| p.module_id.as_str())
        .collect();

    // Easiest wins first, richest reward breaking ties.
    let mut incomplete: Vec<_> = catalog
        .into_iter()
        .filter(|m| !finished.contains(&m.id.as_str()))
        .collect();
    incomplete.sort_by(|a, b| {
        a.difficulty
            .cmp(&b.difficulty)
            .then(b.xp_reward.cmp(&a.xp_reward))
    });

    let recommendations: Vec<Value> = incomplete
        .into_iter()
        .take(recommendation_limit(args))
        .map(|m| {
            json!({
                "id": m.id,
                "title": m.title,
                "category": m.category,
                "difficulty": m.difficulty,
                "xpReward": m.xp_reward,
                "role": m.audience_role,
            })
        })
        .collect();
    Ok(json!({ "success": true, "recommendations": recommendations }))
}

async fn complete_task(pool: &PgPool, user_id: DbId, task_id: DbId) -> Result<Value, AgentError> {
    let outcome = TaskRepo::complete(pool, task_id, user_id).await?;
    Ok(match outcome {
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
    })
}

async fn get_user_profile(pool: &PgPool, user_id: DbId) -> Result<Value, AgentError> {
    Ok(match load_user(pool, user_id).await? {
        Some(user) => json!({ "success": true, "profile": Profile::from(&user) }),
        None => user_not_found(),
    })
}

async fn create_learning_plan(
    pool: &PgPool,
    user_id: DbId,
    focus_area: &str,
    timeframe: Option<&str>,
) -> Result<Value, AgentError> {
    let Some(user) = load_user(pool, user_id).await? else {
        return Ok(json!({ "success": false, "message": "Could not retrieve user profile" }));
    };
    let plan = learning_plan::build_plan(focus_area, timeframe, &user.role, &user.department);
    Ok(json!({ "success": true, "learning_plan": plan }))
}

async fn analyze_performance_trends(
    pool: &PgPool,
    user_id: DbId,
    args: &Value,
) -> Result<Value, AgentError> {
    let period = args["time_period"].as_str().unwrap_or("30 days");
    let days = trends::parse_period_to_days(period);
    let now = Utc::now();
    let snapshots = snapshots_since(pool, user_id, days).await?;
    let analysis = trends::analyze(&snapshots, period, now - Duration::days(days), now);
    Ok(json!({ "success": true, "analysis": analysis }))
}

async fn get_skill_gap_analysis(
    pool: &PgPool,
    user_id: DbId,
    args: &Value,
) -> Result<Value, AgentError> {
    let target_role = args["target_role"]
        .as_str()
        .unwrap_or(skills::DEFAULT_TARGET_ROLE);
    let Some(user) = load_user(pool, user_id).await? else {
        return Ok(user_not_found());
    };
    let completed = TaskRepo::completed_for_user(pool, user_id).await?;
    let snapshots: Vec<TaskSnapshot> = completed.iter().map(|t| t.snapshot()).collect();
    let analysis = skills::analyze_gap(&user.role, target_role, &snapshots);
    Ok(json!({ "success": true, "analysis": analysis }))
}

async fn create_action_plan(
    pool: &PgPool,
    user_id: DbId,
    goal: &str,
    args: &Value,
) -> Result<Value, AgentError> {
    let Some(user) = load_user(pool, user_id).await? else {
        return Ok(user_not_found());
    };
    let priority = args["priority_level"]
        .as_str()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default();
    let plan = action_plan::build(
        goal,
        args["timeframe"].as_str(),
        priority,
        &user.role,
        Utc::now(),
    );
    Ok(json!({ "success": true, "action_plan": plan }))
}

async fn get_peer_benchmarks(
    pool: &PgPool,
    user_id: DbId,
    args: &Value,
) -> Result<Value, AgentError> {
    let comparison = args["comparison_type"]
        .as_str()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default();
    let Some(user) = load_user(pool, user_id).await? else {
        return Ok(user_not_found());
    };
    let peers = UserRepo::peers_of(pool, &user, comparison).await?;
    let stats: Vec<PeerStats> = peers.iter().map(|p| p.peer_stats()).collect();
    let benchmarks = benchmarks::benchmark(comparison, user.current_xp, user.streak_days, &stats);
    Ok(json!({ "success": true, "benchmarks": benchmarks }))
}

async fn predict_career_outcomes(
    pool: &PgPool,
    user_id: DbId,
    args: &Value,
) -> Result<Value, AgentError> {
    let years = args["projection_years"]
        .as_f64()
        .map(|y| y as i64)
        .unwrap_or(projection::DEFAULT_PROJECTION_YEARS);
    let Some(user) = load_user(pool, user_id).await? else {
        return Ok(user_not_found());
    };

    let now = Utc::now();
    let snapshots = snapshots_since(pool, user_id, PROJECTION_WINDOW_DAYS).await?;
    let recent = trends::analyze(
        &snapshots,
        "90 days",
        now - Duration::days(PROJECTION_WINDOW_DAYS),
        now,
    );
    let xp_per_day = recent.total_xp_earned as f64 / PROJECTION_WINDOW_DAYS as f64;

    let predictions = projection::project(
        &user.role,
        user.current_xp,
        recent.completion_rate,
        xp_per_day,
        years,
    );
    Ok(json!({ "success": true, "predictions": predictions }))
}
