//! Shared response envelope for API handlers.
//!
//! Resource endpoints respond with a `{ "success": true, ... }` envelope the
//! frontend stores key on. Use [`SuccessBody`] instead of ad-hoc
//! `serde_json::json!({ "success": true, ... })` so the payload keeps
//! compile-time type safety.

use serde::Serialize;

/// Standard `{ "success": true, ...payload }` response envelope.
///
/// The payload's fields are flattened next to the `success` flag.
#[derive(Debug, Serialize)]
pub struct SuccessBody<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> SuccessBody<T> {
    pub fn new(payload: T) -> Self {
        Self {
            success: true,
            payload,
        }
    }
}
