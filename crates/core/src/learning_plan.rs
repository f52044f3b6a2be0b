//! Personalized learning-plan generation.
//!
//! A static `{focus_area: {department: [skills]}}` table drives plan
//! contents; anything unmatched falls back to a generic skill list. Plans
//! are fully deterministic given the same inputs.

use serde::Serialize;

/// Default plan horizon when the caller does not supply one.
pub const DEFAULT_TIMEFRAME: &str = "3 months";

/// Fixed weekly time commitment quoted in every plan.
pub const WEEKLY_TIME_COMMITMENT: &str = "3-5 hours";

/// One milestone in a learning plan.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Milestone {
    pub week: usize,
    pub skill: String,
    pub deliverable: String,
}

/// A generated learning plan.
#[derive(Debug, Clone, Serialize)]
pub struct LearningPlan {
    pub focus_area: String,
    pub timeframe: String,
    pub target_role: String,
    pub department: String,
    pub recommended_skills: Vec<String>,
    pub weekly_time_commitment: &'static str,
    pub milestones: Vec<Milestone>,
}

const GENERIC_SKILLS: [&str; 4] = [
    "Communication Skills",
    "Project Management",
    "Problem Solving",
    "Team Collaboration",
];

/// Skill table keyed by (focus area, department).
fn skills_for(focus_area: &str, department: &str) -> Vec<String> {
    let skills: &[&str] = match (focus_area, department) {
        ("technical", "Engineering") => &[
            "Advanced System Design",
            "Cloud Architecture Patterns",
            "Performance Optimization",
            "Security Best Practices",
        ],
        ("technical", "Product") => &[
            "Data Analysis & SQL",
            "A/B Testing Frameworks",
            "API Design Principles",
            "Technical Product Management",
        ],
        ("technical", "Design") => &[
            "Design Systems Architecture",
            "Prototyping with Code",
            "Accessibility Standards",
            "Design Ops & Tooling",
        ],
        ("leadership", "Engineering") => &[
            "Technical Leadership",
            "Code Review Best Practices",
            "Mentoring Junior Developers",
            "Engineering Management",
        ],
        ("leadership", "Product") => &[
            "Product Strategy",
            "Stakeholder Management",
            "Cross-functional Leadership",
            "OKRs & Goal Setting",
        ],
        ("leadership", "Design") => &[
            "Design Leadership",
            "Design Critique Facilitation",
            "Creative Direction",
            "Design Team Management",
        ],
        _ => &GENERIC_SKILLS,
    };
    skills.iter().map(|s| s.to_string()).collect()
}

/// Build a learning plan for a user's role and department.
///
/// Milestones land every three weeks (`week = (index + 1) * 3`) with a fixed
/// deliverable template per skill.
pub fn build_plan(
    focus_area: &str,
    timeframe: Option<&str>,
    role: &str,
    department: &str,
) -> LearningPlan {
    let skills = skills_for(focus_area, department);
    let milestones = skills
        .iter()
        .enumerate()
        .map(|(idx, skill)| Milestone {
            week: (idx + 1) * 3,
            skill: skill.clone(),
            deliverable: format!("Complete {skill} assessment and practice project"),
        })
        .collect();

    LearningPlan {
        focus_area: focus_area.to_string(),
        timeframe: timeframe.unwrap_or(DEFAULT_TIMEFRAME).to_string(),
        target_role: role.to_string(),
        department: department.to_string(),
        recommended_skills: skills,
        weekly_time_commitment: WEEKLY_TIME_COMMITMENT,
        milestones,
    }
}
