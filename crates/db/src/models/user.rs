//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use questboard_core::analytics::PeerStats;
use questboard_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub employee_id: String,
    pub role: String,
    pub department: String,
    pub manager_name: String,
    pub level: i32,
    pub current_xp: i32,
    pub streak_days: i32,
    pub intro_completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Benchmark view of this row.
    pub fn peer_stats(&self) -> PeerStats {
        PeerStats {
            current_xp: self.current_xp,
            level: self.level,
            streak_days: self.streak_days,
        }
    }
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub employee_id: String,
    pub role: String,
    pub department: String,
    pub manager_name: String,
    pub level: i32,
    pub current_xp: i32,
    pub streak_days: i32,
    pub intro_completed: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            employee_id: user.employee_id.clone(),
            role: user.role.clone(),
            department: user.department.clone(),
            manager_name: user.manager_name.clone(),
            level: user.level,
            current_xp: user.current_xp,
            streak_days: user.streak_days,
            intro_completed: user.intro_completed,
        }
    }
}

/// Display-shaped profile, as surfaced to the coaching agent.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub manager: String,
    pub level: i32,
    pub current_xp: i32,
    pub streak_days: i32,
    pub employee_id: String,
}

impl From<&User> for Profile {
    fn from(user: &User) -> Self {
        Self {
            name: format!("{} {}", user.first_name, user.last_name),
            email: user.email.clone(),
            role: user.role.clone(),
            department: user.department.clone(),
            manager: user.manager_name.clone(),
            level: user.level,
            current_xp: user.current_xp,
            streak_days: user.streak_days,
            employee_id: user.employee_id.clone(),
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub employee_id: String,
    pub role: String,
    pub department: String,
    pub manager_name: String,
}
