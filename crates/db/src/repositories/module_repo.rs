//! Repository for the module catalog and per-user progress.

use chrono::Utc;
use sqlx::PgPool;

use questboard_core::catalog::{AudienceRole, ModuleSeed};
use questboard_core::types::DbId;

use crate::models::module::{Module, ModuleProgress, UpsertModuleProgress};

const COLUMNS: &str = "id, title, category, difficulty, estimated_minutes, total_lessons, \
                       xp_reward, description, tags, video_url, thumbnail, audience_role";

/// Provides catalog reads, seeding, and progress upserts.
pub struct ModuleRepo;

impl ModuleRepo {
    /// Full catalog, stable order by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Module>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM modules ORDER BY id");
        sqlx::query_as::<_, Module>(&query).fetch_all(pool).await
    }

    /// Catalog filtered to one audience role, stable order by id.
    pub async fn list_for_audience(
        pool: &PgPool,
        audience: AudienceRole,
    ) -> Result<Vec<Module>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM modules WHERE audience_role = $1 ORDER BY id");
        sqlx::query_as::<_, Module>(&query)
            .bind(audience.as_str())
            .fetch_all(pool)
            .await
    }

    /// Upsert the default catalog. Re-running refreshes every column from
    /// the seed, so edits to seed data propagate on the next seeding.
    pub async fn seed_defaults(
        pool: &PgPool,
        seeds: &[ModuleSeed],
    ) -> Result<u64, sqlx::Error> {
        let mut upserted = 0;
        for seed in seeds {
            let tags: Vec<String> = seed.tags.iter().map(|t| t.to_string()).collect();
            let result = sqlx::query(
                "INSERT INTO modules (id, title, category, difficulty, estimated_minutes, \
                 total_lessons, xp_reward, description, tags, video_url, thumbnail, audience_role)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                 ON CONFLICT (id) DO UPDATE SET
                     title = EXCLUDED.title,
                     category = EXCLUDED.category,
                     difficulty = EXCLUDED.difficulty,
                     estimated_minutes = EXCLUDED.estimated_minutes,
                     total_lessons = EXCLUDED.total_lessons,
                     xp_reward = EXCLUDED.xp_reward,
                     description = EXCLUDED.description,
                     tags = EXCLUDED.tags,
                     video_url = EXCLUDED.video_url,
                     thumbnail = EXCLUDED.thumbnail,
                     audience_role = EXCLUDED.audience_role",
            )
            .bind(seed.id)
            .bind(seed.title)
            .bind(seed.category)
            .bind(seed.difficulty)
            .bind(seed.estimated_minutes)
            .bind(seed.total_lessons)
            .bind(seed.xp_reward)
            .bind(seed.description)
            .bind(&tags)
            .bind(seed.video_url)
            .bind(seed.thumbnail)
            .bind(seed.audience_role.as_str())
            .execute(pool)
            .await?;
            upserted += result.rows_affected();
        }
        Ok(upserted)
    }

    /// All progress rows for a user.
    pub async fn progress_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ModuleProgress>, sqlx::Error> {
        sqlx::query_as::<_, ModuleProgress>(
            "SELECT module_id, progress, last_opened_at FROM user_modules \
             WHERE user_id = $1 ORDER BY last_opened_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Record progress for one module, clamping to 0-100 and keeping the
    /// most recent open time.
    pub async fn upsert_progress(
        pool: &PgPool,
        input: &UpsertModuleProgress,
    ) -> Result<ModuleProgress, sqlx::Error> {
        let progress = input.progress.clamp(0, 100);
        let last_opened_at = input.last_opened_at.unwrap_or_else(Utc::now);
        sqlx::query_as::<_, ModuleProgress>(
            "INSERT INTO user_modules (user_id, module_id, progress, last_opened_at)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (user_id, module_id) DO UPDATE SET
                 progress = EXCLUDED.progress,
                 last_opened_at = EXCLUDED.last_opened_at
             RETURNING module_id, progress, last_opened_at",
        )
        .bind(input.user_id)
        .bind(&input.module_id)
        .bind(progress)
        .bind(last_opened_at)
        .fetch_one(pool)
        .await
    }
}
