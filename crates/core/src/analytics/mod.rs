//! Career-coach analytics.
//!
//! Pure aggregation over snapshots of a user's task and peer rows. The
//! database layer converts its row models into [`TaskSnapshot`] /
//! [`PeerStats`] so everything in this tree stays synchronous and testable
//! with in-memory fixtures.

pub mod action_plan;
pub mod benchmarks;
pub mod projection;
pub mod skills;
pub mod trends;

use crate::tasks::TaskStatus;
use crate::types::Timestamp;

/// The slice of a task row the analytics helpers need.
#[derive(Debug, Clone)]
pub struct TaskSnapshot {
    pub title: String,
    pub category: String,
    pub status: TaskStatus,
    pub points: i32,
    pub due_date: Timestamp,
    pub created_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}

impl TaskSnapshot {
    /// Whether this task is pending and past its due date.
    pub fn is_overdue(&self, now: Timestamp) -> bool {
        self.status == TaskStatus::Todo && self.due_date < now
    }
}

/// The slice of a peer user row used for benchmarking.
#[derive(Debug, Clone, Copy)]
pub struct PeerStats {
    pub current_xp: i32,
    pub level: i32,
    pub streak_days: i32,
}

/// Integer percentage of `part` over `whole`, rounded. Zero when `whole`
/// is empty so an empty window never yields NaN.
pub(crate) fn percentage(part: usize, whole: usize) -> i32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as i32
}
