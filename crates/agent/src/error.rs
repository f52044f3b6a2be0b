//! Error type for the agent crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("network error talking to completion provider: {0}")]
    Network(#[from] reqwest::Error),

    #[error("completion provider returned {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("failed to parse provider response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("provider response contained no choices")]
    EmptyResponse,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
