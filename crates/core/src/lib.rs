//! Questboard core library.
//!
//! Shared types, error definitions, and pure domain logic for the gamified
//! onboarding platform: task status/category rules, XP-to-level conversion,
//! the employee directory, learning-plan tables, and the module catalog seed.
//! Everything here is synchronous and database-free so it can be unit tested
//! without infrastructure.

pub mod analytics;
pub mod catalog;
pub mod directory;
pub mod error;
pub mod gamification;
pub mod learning_plan;
pub mod tasks;
pub mod types;
