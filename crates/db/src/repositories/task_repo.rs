//! Repository for the `tasks` table.
//!
//! Task completion state and user XP always move together inside one
//! transaction, with the task row locked `FOR UPDATE`, so two concurrent
//! mutations of the same task cannot double-award or lose XP. `toggle` is
//! the single mutation path; `complete` wraps it with an already-done guard.

use chrono::Utc;
use sqlx::{PgPool, Postgres, Transaction};

use questboard_core::gamification::level_for_xp;
use questboard_core::tasks::{RoleTaskSeed, TaskStatus};
use questboard_core::types::{DbId, Timestamp};

use crate::models::task::{CreateTask, Task};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, title, description, category, due_date, points, \
                       is_mandatory, status, completed_at, created_at";

/// Outcome of a completion attempt.
#[derive(Debug)]
pub enum CompleteOutcome {
    /// Task moved to done; XP was awarded.
    Completed { task: Task, xp_awarded: i32 },
    /// No task with that id belongs to the caller.
    NotFound,
    /// The task was already done; nothing changed.
    AlreadyCompleted,
}

/// Outcome of a toggle attempt.
#[derive(Debug)]
pub enum ToggleOutcome {
    /// Status flipped; `points_delta` is positive for todo->done and
    /// negative for done->todo.
    Toggled { task: Task, points_delta: i32 },
    /// No task with that id belongs to the caller.
    NotFound,
}

/// Provides CRUD and state-transition operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// All tasks for a user ordered by due date (earliest first).
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE user_id = $1 ORDER BY due_date ASC");
        sqlx::query_as::<_, Task>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Tasks created on or after `since`, ordered by completion time.
    pub async fn created_since(
        pool: &PgPool,
        user_id: DbId,
        since: Timestamp,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks WHERE user_id = $1 AND created_at >= $2 \
             ORDER BY completed_at ASC NULLS LAST"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(user_id)
            .bind(since)
            .fetch_all(pool)
            .await
    }

    /// Completed tasks for a user (for skill inference).
    pub async fn completed_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE user_id = $1 AND status = 'done'");
        sqlx::query_as::<_, Task>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a task, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (user_id, title, category, due_date, points, is_mandatory)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(input.due_date)
            .bind(input.points)
            .bind(input.is_mandatory)
            .fetch_one(pool)
            .await
    }

    /// Delete every task belonging to a user. Returns the number removed.
    pub async fn delete_all_for_user(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Count the user's role-specific (Learning/Technical) tasks.
    pub async fn count_role_tasks(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM tasks WHERE user_id = $1 AND category IN ('Learning', 'Technical')",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Delete the user's role-specific (Learning/Technical) tasks.
    pub async fn delete_role_tasks(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM tasks WHERE user_id = $1 AND category IN ('Learning', 'Technical')",
        )
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Insert the five role-specific seed tasks for a user.
    pub async fn insert_seeds(
        pool: &PgPool,
        user_id: DbId,
        seeds: &[RoleTaskSeed],
    ) -> Result<Vec<Task>, sqlx::Error> {
        let now = Utc::now();
        let mut created = Vec::with_capacity(seeds.len());
        let query = format!(
            "INSERT INTO tasks (user_id, title, category, due_date, points, is_mandatory)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        for seed in seeds {
            let task = sqlx::query_as::<_, Task>(&query)
                .bind(user_id)
                .bind(seed.title)
                .bind(seed.category.as_str())
                .bind(now + chrono::Duration::days(seed.due_in_days))
                .bind(seed.points)
                .bind(seed.is_mandatory)
                .fetch_one(pool)
                .await?;
            created.push(task);
        }
        Ok(created)
    }

    /// Mark a task done and award XP. Rejects (without mutating) when the
    /// task is absent, not owned by `user_id`, or already done.
    pub async fn complete(
        pool: &PgPool,
        task_id: DbId,
        user_id: DbId,
    ) -> Result<CompleteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(task) = Self::lock_task(&mut tx, task_id, user_id).await? else {
            return Ok(CompleteOutcome::NotFound);
        };
        if task.status() == TaskStatus::Done {
            return Ok(CompleteOutcome::AlreadyCompleted);
        }

        let task = Self::set_done(&mut tx, task_id).await?;
        Self::adjust_xp(&mut tx, user_id, task.points).await?;
        tx.commit().await?;

        let xp_awarded = task.points;
        Ok(CompleteOutcome::Completed { task, xp_awarded })
    }

    /// Flip a task between todo and done, moving XP symmetrically.
    pub async fn toggle(
        pool: &PgPool,
        task_id: DbId,
        user_id: DbId,
    ) -> Result<ToggleOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let Some(task) = Self::lock_task(&mut tx, task_id, user_id).await? else {
            return Ok(ToggleOutcome::NotFound);
        };

        let (task, points_delta) = if task.status() == TaskStatus::Done {
            let task = Self::set_todo(&mut tx, task_id).await?;
            let delta = -task.points;
            Self::adjust_xp(&mut tx, user_id, delta).await?;
            (task, delta)
        } else {
            let task = Self::set_done(&mut tx, task_id).await?;
            let delta = task.points;
            Self::adjust_xp(&mut tx, user_id, delta).await?;
            (task, delta)
        };
        tx.commit().await?;

        Ok(ToggleOutcome::Toggled { task, points_delta })
    }

    /// Fetch a task scoped to its owner with a row lock for the current
    /// transaction. `None` covers both "absent" and "not yours".
    async fn lock_task(
        tx: &mut Transaction<'_, Postgres>,
        task_id: DbId,
        user_id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM tasks WHERE id = $1 AND user_id = $2 FOR UPDATE");
        sqlx::query_as::<_, Task>(&query)
            .bind(task_id)
            .bind(user_id)
            .fetch_optional(&mut **tx)
            .await
    }

    async fn set_done(
        tx: &mut Transaction<'_, Postgres>,
        task_id: DbId,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET status = 'done', completed_at = NOW() WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(task_id)
            .fetch_one(&mut **tx)
            .await
    }

    async fn set_todo(
        tx: &mut Transaction<'_, Postgres>,
        task_id: DbId,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET status = 'todo', completed_at = NULL WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(task_id)
            .fetch_one(&mut **tx)
            .await
    }

    /// Apply an XP delta (clamped at zero) and recompute the derived level.
    async fn adjust_xp(
        tx: &mut Transaction<'_, Postgres>,
        user_id: DbId,
        delta: i32,
    ) -> Result<(), sqlx::Error> {
        let (new_xp,): (i32,) = sqlx::query_as(
            "UPDATE users SET current_xp = GREATEST(current_xp + $2, 0), updated_at = NOW() \
             WHERE id = $1 RETURNING current_xp",
        )
        .bind(user_id)
        .bind(delta)
        .fetch_one(&mut **tx)
        .await?;

        sqlx::query("UPDATE users SET level = $2 WHERE id = $1")
            .bind(user_id)
            .bind(level_for_xp(new_xp))
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
}
