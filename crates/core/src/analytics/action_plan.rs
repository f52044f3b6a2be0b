//! Deterministic, time-bound action plans for a stated goal.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::Serialize;

use super::trends::parse_period_to_days;
use crate::error::CoreError;
use crate::types::Timestamp;

/// Hours budgeted per action step.
const HOURS_PER_STEP: i64 = 6;

/// Priority attached to a plan. Defaults to medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(CoreError::Validation(format!("Unknown priority: {other}"))),
        }
    }
}

/// One concrete step within a plan.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActionStep {
    pub step: usize,
    pub description: String,
    /// 1-based week the step is scheduled for.
    pub week: i64,
}

/// A milestone checkpoint derived from the steps.
#[derive(Debug, Clone, Serialize)]
pub struct PlanMilestone {
    pub week: i64,
    pub checkpoint: String,
}

/// Result of [`build`].
#[derive(Debug, Clone, Serialize)]
pub struct ActionPlan {
    pub goal: String,
    pub deadline: Timestamp,
    pub priority: String,
    pub estimated_effort_hours: i64,
    pub weekly_commitment_hours: i64,
    pub action_steps: Vec<ActionStep>,
    pub milestones: Vec<PlanMilestone>,
    pub success_metrics: Vec<String>,
    pub potential_blockers: Vec<String>,
}

/// Build a plan for `goal` due after `timeframe` (default four weeks).
///
/// Four fixed-phase steps are spread evenly across the available weeks, so
/// the same inputs always produce the same plan.
pub fn build(
    goal: &str,
    timeframe: Option<&str>,
    priority: Priority,
    role: &str,
    now: Timestamp,
) -> ActionPlan {
    let days = timeframe.map(parse_period_to_days).unwrap_or(28).max(7);
    let weeks = (days / 7).max(1);
    let deadline = now + Duration::days(days);

    let phases = [
        format!("Break \"{goal}\" into measurable sub-goals and baseline where you stand"),
        format!("Complete the highest-impact learning tasks related to \"{goal}\""),
        format!("Apply what you learned to a real deliverable for \"{goal}\""),
        format!("Review progress on \"{goal}\" with your manager and adjust"),
    ];
    let action_steps: Vec<ActionStep> = phases
        .into_iter()
        .enumerate()
        .map(|(idx, description)| ActionStep {
            step: idx + 1,
            description,
            // Spread the four phases across the available weeks.
            week: (idx as i64 * weeks / 4) + 1,
        })
        .collect();

    let estimated_effort_hours = action_steps.len() as i64 * HOURS_PER_STEP;
    let weekly_commitment_hours = (estimated_effort_hours + weeks - 1) / weeks;

    let milestones = action_steps
        .iter()
        .map(|step| PlanMilestone {
            week: step.week,
            checkpoint: format!("Step {} done: {}", step.step, step.description),
        })
        .collect();

    ActionPlan {
        goal: goal.to_string(),
        deadline,
        priority: priority.to_string(),
        estimated_effort_hours,
        weekly_commitment_hours,
        action_steps,
        milestones,
        success_metrics: vec![
            format!("Demonstrable progress on \"{goal}\" accepted by your manager"),
            "All related onboarding tasks completed on time".to_string(),
            "Self-assessed confidence improved by at least one level".to_string(),
        ],
        potential_blockers: vec![
            "Competing onboarding deadlines in the same window".to_string(),
            format!("Limited hands-on opportunities for \"{goal}\" in the {role} role"),
        ],
    }
}
