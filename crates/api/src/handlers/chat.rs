//! Handler for the career-coach chat endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use questboard_agent::run_chat_turn;
use questboard_agent::wire::ChatMessage;
use questboard_core::types::DbId;

use crate::state::AppState;

/// Shown when no provider API key is configured (503).
const DISABLED_MESSAGE: &str =
    "Chat is temporarily unavailable because OPENAI_API_KEY is not configured on the server.";

/// Shown when the request carries no user id (400).
const LOGIN_MESSAGE: &str = "Please log in to continue using the career coach.";

/// Shown when a provider or database error interrupts the turn (500).
const APOLOGY_MESSAGE: &str = "I encountered a technical issue. Please try again in a moment.";

/// Request body for `POST /api/chat`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    pub user_id: Option<DbId>,
}

/// Every chat outcome, including the failure ones, answers with this shape
/// so the chat widget can always render `response` as the coach's reply.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /api/chat
///
/// Run one coaching turn: forward the conversation to the completion
/// provider, execute any tool calls it makes against this user's data, and
/// return the final reply.
///
/// The disabled check runs before anything else so a keyless deployment
/// answers 503 even to malformed requests.
pub async fn chat(State(state): State<AppState>, Json(input): Json<ChatRequest>) -> Response {
    let Some(client) = state.coach.as_ref() else {
        return reply(StatusCode::SERVICE_UNAVAILABLE, DISABLED_MESSAGE);
    };

    let Some(user_id) = input.user_id else {
        return reply(StatusCode::BAD_REQUEST, LOGIN_MESSAGE);
    };

    tracing::info!(user_id, messages = input.messages.len(), "chat turn");

    match run_chat_turn(client, &state.pool, user_id, &input.messages).await {
        Ok(response) => (StatusCode::OK, Json(ChatResponse { response })).into_response(),
        Err(err) => {
            tracing::error!(user_id, error = %err, "chat turn failed");
            reply(StatusCode::INTERNAL_SERVER_ERROR, APOLOGY_MESSAGE)
        }
    }
}

fn reply(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ChatResponse {
            response: message.to_string(),
        }),
    )
        .into_response()
}
