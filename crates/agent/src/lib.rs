//! Career-coach agent: completion-provider client, tool catalog, dispatch,
//! and the two-round chat orchestration loop.

pub mod client;
pub mod dispatch;
pub mod error;
pub mod orchestrator;
pub mod prompt;
pub mod registry;
pub mod wire;

pub use client::CoachClient;
pub use error::AgentError;
pub use orchestrator::run_chat_turn;
