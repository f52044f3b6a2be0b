//! Two-round chat orchestration.
//!
//! Round one offers the tool catalog; if the model requests tools they are
//! executed sequentially in call order and their results appended as
//! tool-role messages. Round two runs without tools, so a turn contains at
//! most one round of tool use.

use serde_json::json;
use sqlx::PgPool;
use tracing::{debug, info};

use questboard_core::types::DbId;

use crate::client::CoachClient;
use crate::dispatch::{dispatch, DispatchOutcome};
use crate::error::AgentError;
use crate::prompt::COACH_SYSTEM_PROMPT;
use crate::registry::tool_catalog;
use crate::wire::ChatMessage;

/// Run one chat turn for `user_id` and return the assistant's reply text.
///
/// `history` is the client-supplied conversation, most recent message last.
pub async fn run_chat_turn(
    client: &CoachClient,
    pool: &PgPool,
    user_id: DbId,
    history: &[ChatMessage],
) -> Result<String, AgentError> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(ChatMessage::system(COACH_SYSTEM_PROMPT));
    messages.extend_from_slice(history);

    let first = client.complete(&messages, Some(tool_catalog())).await?;

    if first.tool_calls.is_empty() {
        debug!(user_id, "assistant answered without tools");
        return Ok(first.content.unwrap_or_default());
    }

    info!(user_id, calls = first.tool_calls.len(), "executing tool calls");
    let mut followup = messages;
    followup.push(first.to_chat_message());

    for call in &first.tool_calls {
        let name = call.function.name.as_str();
        let outcome = dispatch(pool, user_id, name, &call.function.arguments).await?;
        let content = match outcome {
            DispatchOutcome::Handled(value) => value.to_string(),
            DispatchOutcome::UnknownTool => {
                json!({ "success": false, "error": format!("Unknown tool: {name}") }).to_string()
            }
            DispatchOutcome::MalformedArgs => {
                json!({ "success": false, "error": "Malformed tool arguments" }).to_string()
            }
        };
        followup.push(ChatMessage::tool_result(&call.id, name, content));
    }

    // No tools on the second round; one round of tool use per turn.
    let second = client.complete(&followup, None).await?;
    Ok(second.content.unwrap_or_default())
}
