//! Task entity model, DTOs, and the derived task overview.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use questboard_core::analytics::TaskSnapshot;
use questboard_core::tasks::TaskStatus;
use questboard_core::types::{DbId, Timestamp};

/// Full task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub due_date: Timestamp,
    pub points: i32,
    pub is_mandatory: bool,
    pub status: String,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl Task {
    /// Typed view of the text `status` column. Rows can only hold the three
    /// checked values, so an unparsable status is treated as todo.
    pub fn status(&self) -> TaskStatus {
        self.status.parse().unwrap_or(TaskStatus::Todo)
    }

    /// Analytics view of this row.
    pub fn snapshot(&self) -> TaskSnapshot {
        TaskSnapshot {
            title: self.title.clone(),
            category: self.category.clone(),
            status: self.status(),
            points: self.points,
            due_date: self.due_date,
            created_at: self.created_at,
            completed_at: self.completed_at,
        }
    }
}

/// DTO for inserting a task.
#[derive(Debug, Deserialize)]
pub struct CreateTask {
    pub user_id: DbId,
    pub title: String,
    pub category: String,
    pub due_date: Timestamp,
    pub points: i32,
    pub is_mandatory: bool,
}

/// Partitioned view of a user's tasks plus derived aggregates.
///
/// `overdue_tasks` is a subset of `pending_tasks`, never a fourth disjoint
/// bucket; snoozed tasks appear only in `all_tasks` and the total.
#[derive(Debug, Clone, Serialize)]
pub struct TaskOverview {
    pub all_tasks: Vec<Task>,
    pub pending_tasks: Vec<Task>,
    pub completed_tasks: Vec<Task>,
    pub overdue_tasks: Vec<Task>,
    pub total_count: usize,
    pub pending_count: usize,
    pub completed_count: usize,
    pub overdue_count: usize,
    pub next_deadline: Option<Timestamp>,
    pub total_xp_earned: i32,
}

impl TaskOverview {
    /// Partition tasks (assumed ordered by due date) as of `now`.
    pub fn build(tasks: Vec<Task>, now: Timestamp) -> Self {
        let pending: Vec<Task> = tasks
            .iter()
            .filter(|t| t.status() == TaskStatus::Todo)
            .cloned()
            .collect();
        let completed: Vec<Task> = tasks
            .iter()
            .filter(|t| t.status() == TaskStatus::Done)
            .cloned()
            .collect();
        let overdue: Vec<Task> = pending
            .iter()
            .filter(|t| t.due_date < now)
            .cloned()
            .collect();

        let next_deadline = pending.first().map(|t| t.due_date);
        let total_xp_earned = completed.iter().map(|t| t.points).sum();

        Self {
            total_count: tasks.len(),
            pending_count: pending.len(),
            completed_count: completed.len(),
            overdue_count: overdue.len(),
            next_deadline,
            total_xp_earned,
            all_tasks: tasks,
            pending_tasks: pending,
            completed_tasks: completed,
            overdue_tasks: overdue,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn task(id: DbId, status: &str, due_in_days: i64, points: i32) -> Task {
        let now = Utc::now();
        Task {
            id,
            user_id: 1,
            title: format!("task {id}"),
            description: String::new(),
            category: "General".into(),
            due_date: now + Duration::days(due_in_days),
            points,
            is_mandatory: false,
            status: status.into(),
            completed_at: (status == "done").then_some(now),
            created_at: now - Duration::days(1),
        }
    }

    #[test]
    fn overview_partitions_pending_completed_overdue() {
        let now = Utc::now();
        let tasks = vec![
            task(1, "todo", -2, 10), // overdue
            task(2, "todo", 3, 20),
            task(3, "done", 1, 50),
            task(4, "snoozed", 1, 5),
        ];
        let overview = TaskOverview::build(tasks, now);

        assert_eq!(overview.total_count, 4);
        assert_eq!(overview.pending_count, 2);
        assert_eq!(overview.completed_count, 1);
        assert_eq!(overview.overdue_count, 1);
        assert_eq!(overview.total_xp_earned, 50);

        // Overdue is a subset of pending.
        for od in &overview.overdue_tasks {
            assert!(overview.pending_tasks.iter().any(|p| p.id == od.id));
        }
    }

    #[test]
    fn next_deadline_is_first_pending_due_date() {
        let now = Utc::now();
        let tasks = vec![task(1, "todo", 2, 10), task(2, "todo", 5, 10)];
        let expected = tasks[0].due_date;
        let overview = TaskOverview::build(tasks, now);
        assert_eq!(overview.next_deadline, Some(expected));
    }

    #[test]
    fn empty_task_list_produces_empty_overview() {
        let overview = TaskOverview::build(Vec::new(), Utc::now());
        assert_eq!(overview.total_count, 0);
        assert_eq!(overview.next_deadline, None);
        assert_eq!(overview.total_xp_earned, 0);
    }

    #[test]
    fn done_tasks_carry_completion_timestamps() {
        let done = task(1, "done", 1, 10);
        assert_eq!(done.status(), TaskStatus::Done);
        assert!(done.completed_at.unwrap() >= done.created_at);
    }
}
