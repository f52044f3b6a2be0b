//! Route definition for the career-coach chat endpoint.

use axum::routing::post;
use axum::Router;

use crate::handlers::chat;
use crate::state::AppState;

/// Routes mounted directly under `/api`.
///
/// ```text
/// POST /chat  -> chat (one coaching turn)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/chat", post(chat::chat))
}
