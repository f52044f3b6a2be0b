//! Naive linear career projection from a recent performance snapshot.
//!
//! Illustrative business logic, not a statistical model: XP accrues at the
//! observed daily rate, level follows the XP curve, and promotion counts come
//! from coarse completion-rate bands.

use serde::Serialize;

use crate::gamification::level_for_xp;

/// Years projected when the caller does not specify.
pub const DEFAULT_PROJECTION_YEARS: i64 = 2;

/// Result of [`project`].
#[derive(Debug, Clone, Serialize)]
pub struct CareerProjection {
    pub projection_years: i64,
    pub current_trajectory: String,
    pub likely_promotions: i64,
    pub expected_skill_level: i32,
    pub projected_xp: i64,
    pub potential_roles: Vec<String>,
    pub optimization_suggestions: Vec<String>,
    pub confidence_score: i32,
}

/// Plausible next roles for a current role.
fn next_roles_for(current_role: &str) -> Vec<String> {
    let roles: &[&str] = match current_role {
        "Data Scientist" => &["Senior Data Scientist", "Machine Learning Engineer"],
        "Business Analyst" => &["Senior Business Analyst", "Product Analyst"],
        "Product Manager" => &["Senior Product Manager", "Group Product Manager"],
        _ => &["Senior Engineer", "Team Lead"],
    };
    roles.iter().map(|r| r.to_string()).collect()
}

/// Project career outcomes `years` ahead.
///
/// `xp_per_day` is the observed rate over the analysis window (typically the
/// last 90 days); `completion_rate` is the integer percentage from the same
/// window.
pub fn project(
    current_role: &str,
    current_xp: i32,
    completion_rate: i32,
    xp_per_day: f64,
    years: i64,
) -> CareerProjection {
    let years = years.max(1);
    let projected_xp = (xp_per_day * 365.0 * years as f64).round() as i64;
    let expected_skill_level = level_for_xp(current_xp.saturating_add(projected_xp as i32));

    let (trajectory, promotions_per_two_years) = if completion_rate >= 80 {
        ("accelerating", 1.5)
    } else if completion_rate >= 50 {
        ("steady", 1.0)
    } else {
        ("at-risk", 0.5)
    };
    let likely_promotions = ((years as f64 / 2.0) * promotions_per_two_years).floor() as i64;

    let mut optimization_suggestions = Vec::new();
    if completion_rate < 80 {
        optimization_suggestions
            .push("Raise your completion rate above 80% to accelerate promotion timing".to_string());
    }
    if xp_per_day < 10.0 {
        optimization_suggestions
            .push("Target higher-point learning modules to lift your XP rate".to_string());
    }
    if optimization_suggestions.is_empty() {
        optimization_suggestions
            .push("Maintain current pace and take on stretch assignments".to_string());
    }

    // Confidence grows with demonstrated throughput, capped well below
    // certainty since this is a linear extrapolation.
    let confidence_score = (40 + completion_rate / 2).clamp(40, 90);

    CareerProjection {
        projection_years: years,
        current_trajectory: trajectory.to_string(),
        likely_promotions,
        expected_skill_level,
        projected_xp,
        potential_roles: next_roles_for(current_role),
        optimization_suggestions,
        confidence_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_performance_projects_accelerating_trajectory() {
        let projection = project("Data Scientist", 500, 90, 20.0, 2);
        assert_eq!(projection.current_trajectory, "accelerating");
        assert_eq!(projection.likely_promotions, 1);
        assert_eq!(projection.projected_xp, 14600);
        assert_eq!(
            projection.potential_roles,
            vec!["Senior Data Scientist", "Machine Learning Engineer"]
        );
    }

    #[test]
    fn low_completion_rate_projects_at_risk() {
        let projection = project("Business Analyst", 0, 20, 2.0, 2);
        assert_eq!(projection.current_trajectory, "at-risk");
        assert_eq!(projection.likely_promotions, 0);
        assert!(projection
            .optimization_suggestions
            .iter()
            .any(|s| s.contains("completion rate")));
    }

    #[test]
    fn zero_xp_rate_projects_no_growth() {
        let projection = project("Data Scientist", 100, 60, 0.0, 3);
        assert_eq!(projection.projected_xp, 0);
        assert_eq!(projection.expected_skill_level, level_for_xp(100));
    }

    #[test]
    fn years_below_one_are_clamped() {
        let projection = project("Data Scientist", 0, 60, 5.0, 0);
        assert_eq!(projection.projection_years, 1);
    }

    #[test]
    fn confidence_is_bounded() {
        assert_eq!(project("X", 0, 0, 0.0, 2).confidence_score, 40);
        assert_eq!(project("X", 0, 100, 0.0, 2).confidence_score, 90);
    }
}
