//! HTTP client for the chat-completions provider.

use serde_json::{json, Value};
use tracing::debug;

use crate::error::AgentError;
use crate::wire::{AssistantMessage, ChatMessage, CompletionResponse};

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-4o";
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 1000;

/// Client for the completion provider backing the career coach.
#[derive(Debug, Clone)]
pub struct CoachClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl CoachClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: COMPLETIONS_URL.to_string(),
        }
    }

    /// Override the completions endpoint (tests point this at a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Issue one completion request. `tools` is present only on the first
    /// round of a chat turn; the second round omits it so the model cannot
    /// recurse into more tool calls.
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        tools: Option<&[Value]>,
    ) -> Result<AssistantMessage, AgentError> {
        let mut body = json!({
            "model": MODEL,
            "messages": messages,
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        });
        if let Some(tools) = tools {
            body["tools"] = json!(tools);
            body["tool_choice"] = json!("auto");
        }

        let response = self
            .http
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        if status != 200 {
            return Err(AgentError::Provider { status, body: text });
        }

        debug!(bytes = text.len(), "completion response received");
        let parsed: CompletionResponse = serde_json::from_str(&text)?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message)
            .ok_or(AgentError::EmptyResponse)
    }
}
