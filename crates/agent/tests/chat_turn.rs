//! Integration tests for the two-round chat orchestration, run against a
//! local stub completions endpoint. These pin the wire mechanics: the tool
//! catalog is offered on round one only, tool results travel back as
//! tool-role messages keyed by call id, and the second round produces the
//! final reply.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use sqlx::PgPool;

use questboard_agent::orchestrator::run_chat_turn;
use questboard_agent::wire::ChatMessage;
use questboard_agent::CoachClient;
use questboard_db::models::task::CreateTask;
use questboard_db::models::user::CreateUser;
use questboard_db::repositories::{TaskRepo, UserRepo};

// ---------------------------------------------------------------------------
// Stub completions server
// ---------------------------------------------------------------------------

/// Serves a fixed sequence of completion replies and records every request
/// body it receives, so tests can assert on what the orchestrator sent.
#[derive(Clone)]
struct StubProvider {
    requests: Arc<Mutex<Vec<Value>>>,
    replies: Arc<Vec<Value>>,
}

async fn completions(State(stub): State<StubProvider>, Json(body): Json<Value>) -> Json<Value> {
    let mut requests = stub.requests.lock().unwrap();
    requests.push(body);
    Json(stub.replies[requests.len() - 1].clone())
}

/// Bind the stub on an ephemeral port; returns the endpoint URL and the
/// recorded request bodies.
async fn spawn_stub(replies: Vec<Value>) -> (String, Arc<Mutex<Vec<Value>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let stub = StubProvider {
        requests: Arc::clone(&requests),
        replies: Arc::new(replies),
    };
    let app = Router::new()
        .route("/v1/chat/completions", post(completions))
        .with_state(stub);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/v1/chat/completions"), requests)
}

fn text_reply(content: &str) -> Value {
    json!({ "choices": [{ "message": { "content": content, "tool_calls": [] } }] })
}

fn tool_call_reply(call_id: &str, name: &str, arguments: &str) -> Value {
    json!({
        "choices": [{
            "message": {
                "content": null,
                "tool_calls": [{
                    "id": call_id,
                    "type": "function",
                    "function": { "name": name, "arguments": arguments }
                }]
            }
        }]
    })
}

async fn seed_user(pool: &PgPool, email: &str) -> i64 {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: "$argon2id$dummy".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Nguyen".to_string(),
            employee_id: "E0058".to_string(),
            role: "Data Scientist".to_string(),
            department: "Engineering".to_string(),
            manager_name: "A. Chen".to_string(),
        },
    )
    .await
    .unwrap();
    user.id
}

async fn seed_task(pool: &PgPool, user_id: i64, title: &str) {
    TaskRepo::create(
        pool,
        &CreateTask {
            user_id,
            title: title.to_string(),
            category: "Learning".to_string(),
            due_date: chrono::Utc::now() + chrono::Duration::days(7),
            points: 10,
            is_mandatory: false,
        },
    )
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Turns
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn plain_answer_takes_a_single_round(pool: PgPool) {
    let user_id = seed_user(&pool, "plain@test.com").await;
    let (url, requests) = spawn_stub(vec![text_reply("Welcome aboard!")]).await;
    let client = CoachClient::new("sk-test".to_string()).with_base_url(url);

    let history = [ChatMessage::user("hello")];
    let reply = run_chat_turn(&client, &pool, user_id, &history).await.unwrap();
    assert_eq!(reply, "Welcome aboard!");

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    // Round one carries the tool catalog and the system prompt ahead of the
    // client-supplied history.
    let body = &requests[0];
    assert!(body["tools"].is_array());
    assert_eq!(body["tool_choice"], "auto");
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(body["messages"][1]["content"], "hello");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn tool_round_feeds_result_back_as_tool_message(pool: PgPool) {
    let user_id = seed_user(&pool, "tools@test.com").await;
    seed_task(&pool, user_id, "Read the handbook").await;
    seed_task(&pool, user_id, "Meet the team").await;

    let (url, requests) = spawn_stub(vec![
        tool_call_reply("call_tasks_1", "get_user_tasks", "{}"),
        text_reply("You have 2 open tasks."),
    ])
    .await;
    let client = CoachClient::new("sk-test".to_string()).with_base_url(url);

    let history = [ChatMessage::user("what's on my plate?")];
    let reply = run_chat_turn(&client, &pool, user_id, &history).await.unwrap();
    assert_eq!(reply, "You have 2 open tasks.");

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 2);

    // Round two must not offer tools again.
    let second = &requests[1];
    assert!(second.get("tools").is_none());
    assert!(second.get("tool_choice").is_none());

    let messages = second["messages"].as_array().unwrap();
    let assistant = messages
        .iter()
        .find(|m| m["role"] == "assistant")
        .expect("assistant tool-call message forwarded to round two");
    assert_eq!(assistant["tool_calls"][0]["id"], "call_tasks_1");

    // The tool result rides a tool-role message keyed by the call id, and its
    // content is the dispatch envelope as a JSON string.
    let tool_msg = messages
        .iter()
        .find(|m| m["role"] == "tool")
        .expect("tool result message in round two");
    assert_eq!(tool_msg["tool_call_id"], "call_tasks_1");
    assert_eq!(tool_msg["name"], "get_user_tasks");
    let envelope: Value = serde_json::from_str(tool_msg["content"].as_str().unwrap()).unwrap();
    assert_eq!(envelope["success"], true);
    assert_eq!(envelope["data"]["total_count"], 2);
    assert_eq!(envelope["data"]["pending_count"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_tool_is_reported_back_not_fatal(pool: PgPool) {
    let user_id = seed_user(&pool, "unknown@test.com").await;
    let (url, requests) = spawn_stub(vec![
        tool_call_reply("call_bad_1", "summon_raise", "{}"),
        text_reply("I can't do that, but here's what I can help with."),
    ])
    .await;
    let client = CoachClient::new("sk-test".to_string()).with_base_url(url);

    let history = [ChatMessage::user("give me a raise")];
    let reply = run_chat_turn(&client, &pool, user_id, &history).await.unwrap();
    assert_eq!(reply, "I can't do that, but here's what I can help with.");

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    let messages = requests[1]["messages"].as_array().unwrap();
    let tool_msg = messages.iter().find(|m| m["role"] == "tool").unwrap();
    assert_eq!(tool_msg["tool_call_id"], "call_bad_1");
    let envelope: Value = serde_json::from_str(tool_msg["content"].as_str().unwrap()).unwrap();
    assert_eq!(envelope["success"], false);
    assert_eq!(envelope["error"], "Unknown tool: summon_raise");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn provider_error_status_surfaces_as_error(pool: PgPool) {
    let user_id = seed_user(&pool, "failing@test.com").await;
    // Nothing listens on port 1, so the first round fails outright.
    let client =
        CoachClient::new("sk-test".to_string()).with_base_url("http://127.0.0.1:1/v1/chat/completions");

    let history = [ChatMessage::user("hello")];
    let result = run_chat_turn(&client, &pool, user_id, &history).await;
    assert!(result.is_err());
}
