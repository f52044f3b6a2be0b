//! Repository for the `users` table.

use sqlx::PgPool;

use questboard_core::analytics::benchmarks::ComparisonType;
use questboard_core::types::DbId;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, first_name, last_name, employee_id, \
                       role, department, manager_name, level, current_xp, streak_days, \
                       intro_completed, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, password_hash, first_name, last_name, employee_id, \
                                role, department, manager_name)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.employee_id)
            .bind(&input.role)
            .bind(&input.department)
            .bind(&input.manager_name)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all users ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY created_at DESC");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Select the peer set for benchmarking: users matching `user` on the
    /// comparison criterion, excluding `user` itself. `Company` compares
    /// against everyone.
    pub async fn peers_of(
        pool: &PgPool,
        user: &User,
        comparison: ComparisonType,
    ) -> Result<Vec<User>, sqlx::Error> {
        let base = format!("SELECT {COLUMNS} FROM users WHERE id <> $1");
        match comparison {
            ComparisonType::Role => {
                let query = format!("{base} AND role = $2");
                sqlx::query_as::<_, User>(&query)
                    .bind(user.id)
                    .bind(&user.role)
                    .fetch_all(pool)
                    .await
            }
            ComparisonType::Department => {
                let query = format!("{base} AND department = $2");
                sqlx::query_as::<_, User>(&query)
                    .bind(user.id)
                    .bind(&user.department)
                    .fetch_all(pool)
                    .await
            }
            ComparisonType::Level => {
                let query = format!("{base} AND level = $2");
                sqlx::query_as::<_, User>(&query)
                    .bind(user.id)
                    .bind(user.level)
                    .fetch_all(pool)
                    .await
            }
            ComparisonType::Company => {
                sqlx::query_as::<_, User>(&base)
                    .bind(user.id)
                    .fetch_all(pool)
                    .await
            }
        }
    }
}
