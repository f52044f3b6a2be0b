//! Skill-gap analysis against static role requirement profiles.

use serde::Serialize;

use super::TaskSnapshot;
use crate::tasks::TaskStatus;

/// Skill profile required for a target role.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RoleRequirements {
    pub technical: Vec<&'static str>,
    pub soft: Vec<&'static str>,
    pub experience_years: i32,
}

/// Target role to compare against when the requested one is unknown.
pub const DEFAULT_TARGET_ROLE: &str = "Senior Engineer";

/// Requirement profile for a target role, defaulting to Senior Engineer.
pub fn requirements_for(target_role: &str) -> RoleRequirements {
    match target_role {
        "Senior Engineer" => RoleRequirements {
            technical: vec![
                "System Design",
                "Cloud Architecture",
                "Performance Optimization",
                "Security",
            ],
            soft: vec![
                "Technical Leadership",
                "Mentoring",
                "Code Review",
                "Architecture Decisions",
            ],
            experience_years: 5,
        },
        "Product Manager" => RoleRequirements {
            technical: vec![
                "Data Analysis",
                "A/B Testing",
                "API Understanding",
                "Technical Writing",
            ],
            soft: vec![
                "Stakeholder Management",
                "Product Strategy",
                "User Research",
                "Roadmap Planning",
            ],
            experience_years: 3,
        },
        "Engineering Manager" => RoleRequirements {
            technical: vec!["System Architecture", "Code Quality", "DevOps", "Security"],
            soft: vec![
                "People Management",
                "Strategic Planning",
                "Budget Management",
                "Hiring",
            ],
            experience_years: 7,
        },
        _ => requirements_for(DEFAULT_TARGET_ROLE),
    }
}

/// Keyword → inferred skill. Matched case-insensitively against completed
/// task titles and categories.
const SKILL_KEYWORDS: [(&str, &str); 12] = [
    ("sql", "Data Analysis"),
    ("excel", "Data Analysis"),
    ("stats", "Data Analysis"),
    ("dashboard", "Data Analysis"),
    ("python", "Programming"),
    ("machine learning", "Machine Learning"),
    ("ml ", "Machine Learning"),
    ("scikit", "Machine Learning"),
    ("security", "Security"),
    ("system design", "System Design"),
    ("mentoring", "Mentoring"),
    ("review", "Code Review"),
];

/// Infer current skills from completed task titles/categories.
///
/// Simple keyword heuristics; the output is deduplicated and keeps first-hit
/// order so results are stable for the same task history.
pub fn infer_skills(tasks: &[TaskSnapshot]) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for task in tasks.iter().filter(|t| t.status == TaskStatus::Done) {
        let haystack = format!("{} {}", task.title, task.category).to_lowercase();
        for (keyword, skill) in SKILL_KEYWORDS {
            if haystack.contains(keyword) && !skills.iter().any(|s| s == skill) {
                skills.push(skill.to_string());
            }
        }
    }
    skills
}

/// Missing skills split by requirement kind.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SkillGaps {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

/// Result of [`analyze_gap`].
#[derive(Debug, Clone, Serialize)]
pub struct SkillGapAnalysis {
    pub current_role: String,
    pub target_role: String,
    pub current_skills: Vec<String>,
    pub required_skills: RoleRequirements,
    pub skill_gaps: SkillGaps,
    pub readiness_score: i32,
    pub recommendations: Vec<String>,
}

/// Compare inferred skills against a target role's requirements.
///
/// Readiness weights technical coverage at 60% and soft-skill coverage at
/// 40%, expressed as an integer 0-100.
pub fn analyze_gap(
    current_role: &str,
    target_role: &str,
    tasks: &[TaskSnapshot],
) -> SkillGapAnalysis {
    let requirements = requirements_for(target_role);
    let current_skills = infer_skills(tasks);

    let missing = |required: &[&'static str]| -> Vec<String> {
        required
            .iter()
            .filter(|req| !current_skills.iter().any(|have| have == *req))
            .map(|req| req.to_string())
            .collect()
    };
    let gaps = SkillGaps {
        technical: missing(&requirements.technical),
        soft: missing(&requirements.soft),
    };

    let coverage = |required: &[&'static str], missing: &[String]| -> f64 {
        if required.is_empty() {
            return 1.0;
        }
        (required.len() - missing.len()) as f64 / required.len() as f64
    };
    let technical_coverage = coverage(&requirements.technical, &gaps.technical);
    let soft_coverage = coverage(&requirements.soft, &gaps.soft);
    let readiness_score = ((technical_coverage * 0.6 + soft_coverage * 0.4) * 100.0).round() as i32;

    let recommendations = gaps
        .technical
        .iter()
        .map(|skill| format!("Build {skill} experience through targeted tasks and modules"))
        .chain(
            gaps.soft
                .iter()
                .map(|skill| format!("Seek opportunities to practice {skill}")),
        )
        .collect();

    SkillGapAnalysis {
        current_role: current_role.to_string(),
        target_role: target_role.to_string(),
        current_skills,
        required_skills: requirements,
        skill_gaps: gaps,
        readiness_score,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn done_task(title: &str, category: &str) -> TaskSnapshot {
        let now = Utc::now();
        TaskSnapshot {
            title: title.into(),
            category: category.into(),
            status: TaskStatus::Done,
            points: 10,
            due_date: now,
            created_at: now,
            completed_at: Some(now),
        }
    }

    #[test]
    fn unknown_target_role_defaults_to_senior_engineer() {
        assert_eq!(
            requirements_for("Chief Vibes Officer"),
            requirements_for(DEFAULT_TARGET_ROLE)
        );
    }

    #[test]
    fn skills_are_inferred_from_completed_titles() {
        let tasks = vec![
            done_task("Complete SQL for Analytics Module", "Learning"),
            done_task("Complete Python Basics Module", "Learning"),
        ];
        let skills = infer_skills(&tasks);
        assert!(skills.contains(&"Data Analysis".to_string()));
        assert!(skills.contains(&"Programming".to_string()));
    }

    #[test]
    fn pending_tasks_do_not_count_as_skills() {
        let mut task = done_task("Complete SQL for Analytics Module", "Learning");
        task.status = TaskStatus::Todo;
        task.completed_at = None;
        assert!(infer_skills(&[task]).is_empty());
    }

    #[test]
    fn readiness_reflects_weighted_coverage() {
        // No skills at all: zero readiness.
        let empty = analyze_gap("Data Scientist", "Senior Engineer", &[]);
        assert_eq!(empty.readiness_score, 0);
        assert_eq!(empty.skill_gaps.technical.len(), 4);

        // One of four technical requirements met, no soft: 0.6 * 0.25 = 15%.
        let tasks = vec![done_task("Security Best Practices workshop", "Learning")];
        let partial = analyze_gap("Data Scientist", "Senior Engineer", &tasks);
        assert_eq!(partial.readiness_score, 15);
        assert!(!partial
            .skill_gaps
            .technical
            .contains(&"Security".to_string()));
    }

    #[test]
    fn recommendations_name_each_gap() {
        let analysis = analyze_gap("Data Scientist", "Product Manager", &[]);
        assert_eq!(
            analysis.recommendations.len(),
            analysis.skill_gaps.technical.len() + analysis.skill_gaps.soft.len()
        );
    }
}
