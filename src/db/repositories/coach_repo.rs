//! Coach repository

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Coach, CoachWithUser},
};

/// Coach id with the owning user's name
#[derive(Debug, sqlx::FromRow)]
pub struct CoachName {
    pub id: Uuid,
    pub name: String,
}

/// Repository for coach database operations
pub struct CoachRepository;

impl CoachRepository {
    /// Create the coach profile for a promoted user
    pub async fn create(
        conn: &mut PgConnection,
        user_id: &Uuid,
        experience_years: i32,
        description: &str,
        profile_image_url: Option<&str>,
    ) -> AppResult<Coach> {
        let coach = sqlx::query_as::<_, Coach>(
            r#"
            INSERT INTO coaches (user_id, experience_years, description, profile_image_url)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(experience_years)
        .bind(description)
        .bind(profile_image_url)
        .fetch_one(conn)
        .await?;

        Ok(coach)
    }

    /// Find the coach profile owned by a user
    pub async fn find_by_user_id(pool: &PgPool, user_id: &Uuid) -> AppResult<Option<Coach>> {
        let coach = sqlx::query_as::<_, Coach>(r#"SELECT * FROM coaches WHERE user_id = $1"#)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

        Ok(coach)
    }

    /// Find coach by ID together with the user's name and role
    pub async fn find_with_user(pool: &PgPool, id: &Uuid) -> AppResult<Option<CoachWithUser>> {
        let coach = sqlx::query_as::<_, CoachWithUser>(
            r#"
            SELECT
                c.id, c.user_id, c.experience_years, c.description, c.profile_image_url,
                c.created_at, c.updated_at,
                u.name AS user_name, u.role AS user_role
            FROM coaches c
            JOIN users u ON c.user_id = u.id
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(coach)
    }

    /// List coaches with pagination
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> AppResult<Vec<CoachName>> {
        let coaches = sqlx::query_as::<_, CoachName>(
            r#"
            SELECT c.id, u.name
            FROM coaches c
            JOIN users u ON c.user_id = u.id
            ORDER BY c.created_at, c.id
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(coaches)
    }

    /// Update the profile fields of the coach owned by `user_id`
    pub async fn update_profile(
        conn: &mut PgConnection,
        user_id: &Uuid,
        experience_years: i32,
        description: &str,
        profile_image_url: Option<&str>,
    ) -> AppResult<Option<Coach>> {
        let coach = sqlx::query_as::<_, Coach>(
            r#"
            UPDATE coaches
            SET
                experience_years = $2,
                description = $3,
                profile_image_url = $4,
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(experience_years)
        .bind(description)
        .bind(profile_image_url)
        .fetch_optional(conn)
        .await?;

        Ok(coach)
    }

    /// Skill ids linked to a coach
    pub async fn skill_ids(pool: &PgPool, coach_id: &Uuid) -> AppResult<Vec<Uuid>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            r#"SELECT skill_id FROM coach_link_skills WHERE coach_id = $1 ORDER BY created_at"#,
        )
        .bind(coach_id)
        .fetch_all(pool)
        .await?;

        Ok(ids)
    }

    /// Replace every skill link of a coach
    pub async fn replace_skills(
        conn: &mut PgConnection,
        coach_id: &Uuid,
        skill_ids: &[Uuid],
    ) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM coach_link_skills WHERE coach_id = $1"#)
            .bind(coach_id)
            .execute(&mut *conn)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO coach_link_skills (coach_id, skill_id)
            SELECT $1, skill_id FROM UNNEST($2::uuid[]) AS t(skill_id)
            ON CONFLICT (coach_id, skill_id) DO NOTHING
            "#,
        )
        .bind(coach_id)
        .bind(skill_ids)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }
}
