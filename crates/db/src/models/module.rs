//! Learning-module catalog model and progress rows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use questboard_core::types::{DbId, Timestamp};

/// Catalog row from the `modules` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Module {
    pub id: String,
    pub title: String,
    pub category: String,
    pub difficulty: i16,
    pub estimated_minutes: i32,
    pub total_lessons: i32,
    pub xp_reward: i32,
    pub description: String,
    pub tags: Vec<String>,
    pub video_url: String,
    pub thumbnail: String,
    pub audience_role: String,
}

/// Client-facing module projection (camelCase keys, zeroed progress).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleResponse {
    pub id: String,
    pub title: String,
    pub category: String,
    pub difficulty: i16,
    pub estimated_minutes: i32,
    pub total_lessons: i32,
    pub xp_reward: i32,
    pub description: String,
    pub tags: Vec<String>,
    pub video_url: String,
    pub thumbnail: String,
    pub role: String,
    pub progress: i16,
}

impl From<Module> for ModuleResponse {
    fn from(m: Module) -> Self {
        Self {
            id: m.id,
            title: m.title,
            category: m.category,
            difficulty: m.difficulty,
            estimated_minutes: m.estimated_minutes,
            total_lessons: m.total_lessons,
            xp_reward: m.xp_reward,
            description: m.description,
            tags: m.tags,
            video_url: m.video_url,
            thumbnail: m.thumbnail,
            role: m.audience_role,
            progress: 0,
        }
    }
}

/// Per-user module progress row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ModuleProgress {
    pub module_id: String,
    pub progress: i16,
    pub last_opened_at: Timestamp,
}

/// DTO for upserting a progress row.
#[derive(Debug, Deserialize)]
pub struct UpsertModuleProgress {
    pub user_id: DbId,
    pub module_id: String,
    pub progress: i16,
    pub last_opened_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_response_uses_camel_case_keys() {
        let module = Module {
            id: "ds-python-basics".into(),
            title: "Python Basics".into(),
            category: "Programming".into(),
            difficulty: 1,
            estimated_minutes: 120,
            total_lessons: 8,
            xp_reward: 120,
            description: String::new(),
            tags: vec!["Python".into()],
            video_url: String::new(),
            thumbnail: String::new(),
            audience_role: "Data Scientist".into(),
        };
        let json = serde_json::to_value(ModuleResponse::from(module)).unwrap();
        assert_eq!(json["estimatedMinutes"], 120);
        assert_eq!(json["xpReward"], 120);
        assert_eq!(json["role"], "Data Scientist");
        assert_eq!(json["progress"], 0);
    }
}
