//! Request handlers, grouped by resource.

pub mod admin;
pub mod auth;
pub mod chat;
pub mod modules;
pub mod tasks;
