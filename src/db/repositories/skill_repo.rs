//! Skill repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Skill};

/// Repository for skill database operations
pub struct SkillRepository;

impl SkillRepository {
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Skill>> {
        let skills = sqlx::query_as::<_, Skill>(r#"SELECT * FROM skills ORDER BY created_at"#)
            .fetch_all(pool)
            .await?;

        Ok(skills)
    }

    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Skill>> {
        let skill = sqlx::query_as::<_, Skill>(r#"SELECT * FROM skills WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(skill)
    }

    pub async fn find_by_name(pool: &PgPool, name: &str) -> AppResult<Option<Skill>> {
        let skill = sqlx::query_as::<_, Skill>(r#"SELECT * FROM skills WHERE name = $1"#)
            .bind(name)
            .fetch_optional(pool)
            .await?;

        Ok(skill)
    }

    pub async fn create(pool: &PgPool, name: &str) -> AppResult<Skill> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"INSERT INTO skills (name) VALUES ($1) RETURNING *"#,
        )
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(skill)
    }

    /// Delete a skill. Returns `false` if no row matched.
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM skills WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// How many of `ids` exist
    pub async fn count_existing(pool: &PgPool, ids: &[Uuid]) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM skills WHERE id = ANY($1)"#)
            .bind(ids)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
