//! Task status/category rules and the seeded role-specific onboarding tasks.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// XP awarded for a task whose row carries no explicit point value.
pub const DEFAULT_TASK_POINTS: i32 = 10;

/// Default due-date offset (days from now) for tasks created without one.
pub const DEFAULT_DUE_IN_DAYS: i64 = 7;

/// Lifecycle state of a task. Stored as lowercase text in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Todo,
    Done,
    Snoozed,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Done => "done",
            Self::Snoozed => "snoozed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Self::Todo),
            "done" => Ok(Self::Done),
            "snoozed" => Ok(Self::Snoozed),
            other => Err(CoreError::Validation(format!(
                "Unknown task status: {other}"
            ))),
        }
    }
}

/// Task category. Stored as its display form in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskCategory {
    Hr,
    It,
    Compliance,
    General,
    Personal,
    Learning,
    Technical,
}

impl TaskCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hr => "HR",
            Self::It => "IT",
            Self::Compliance => "Compliance",
            Self::General => "General",
            Self::Personal => "Personal",
            Self::Learning => "Learning",
            Self::Technical => "Technical",
        }
    }

    /// All valid category labels, used for validation on task creation.
    pub const ALL: [TaskCategory; 7] = [
        Self::Hr,
        Self::It,
        Self::Compliance,
        Self::General,
        Self::Personal,
        Self::Learning,
        Self::Technical,
    ];
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown task category: {s}")))
    }
}

/// Template for one of the five role-specific onboarding tasks seeded at
/// registration (and by the update-role-tasks endpoint).
#[derive(Debug, Clone, Copy)]
pub struct RoleTaskSeed {
    pub title: &'static str,
    pub category: TaskCategory,
    pub due_in_days: i64,
    pub points: i32,
    pub is_mandatory: bool,
}

const DATA_SCIENTIST_TASKS: [RoleTaskSeed; 5] = [
    RoleTaskSeed {
        title: "Complete Python Basics Module",
        category: TaskCategory::Learning,
        due_in_days: 7,
        points: 120,
        is_mandatory: true,
    },
    RoleTaskSeed {
        title: "Complete Python for Data (Pandas/Numpy) Module",
        category: TaskCategory::Learning,
        due_in_days: 14,
        points: 160,
        is_mandatory: true,
    },
    RoleTaskSeed {
        title: "Complete SQL for Analytics Module",
        category: TaskCategory::Learning,
        due_in_days: 10,
        points: 150,
        is_mandatory: true,
    },
    RoleTaskSeed {
        title: "Set Up Python Development Environment",
        category: TaskCategory::Technical,
        due_in_days: 3,
        points: 30,
        is_mandatory: true,
    },
    RoleTaskSeed {
        title: "Complete ML Basics (Scikit-learn) Module",
        category: TaskCategory::Learning,
        due_in_days: 21,
        points: 200,
        is_mandatory: false,
    },
];

const BUSINESS_ANALYST_TASKS: [RoleTaskSeed; 5] = [
    RoleTaskSeed {
        title: "Complete Excel for Analysis Module",
        category: TaskCategory::Learning,
        due_in_days: 5,
        points: 100,
        is_mandatory: true,
    },
    RoleTaskSeed {
        title: "Complete SQL Basics (BA) Module",
        category: TaskCategory::Learning,
        due_in_days: 7,
        points: 120,
        is_mandatory: true,
    },
    RoleTaskSeed {
        title: "Complete BI Dashboards (Power BI/Looker) Module",
        category: TaskCategory::Learning,
        due_in_days: 10,
        points: 150,
        is_mandatory: true,
    },
    RoleTaskSeed {
        title: "Set Up Excel with Power Query",
        category: TaskCategory::Technical,
        due_in_days: 2,
        points: 25,
        is_mandatory: true,
    },
    RoleTaskSeed {
        title: "Complete Business Stats Fundamentals Module",
        category: TaskCategory::Learning,
        due_in_days: 8,
        points: 130,
        is_mandatory: false,
    },
];

/// The five onboarding tasks seeded for a given role.
///
/// "Data Scientist" gets the DS track; every other role gets the Business
/// Analyst track, matching the registration flow's branch.
pub fn role_task_seeds(role: &str) -> &'static [RoleTaskSeed; 5] {
    if role == "Data Scientist" {
        &DATA_SCIENTIST_TASKS
    } else {
        &BUSINESS_ANALYST_TASKS
    }
}
