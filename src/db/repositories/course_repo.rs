//! Course repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{BookedCourse, Course, CourseListing, CourseWithParticipants, CourseWithSkill},
};

/// Editable course fields
#[derive(Debug, Clone)]
pub struct CourseFields<'a> {
    pub skill_id: Uuid,
    pub name: &'a str,
    pub description: &'a str,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub max_participants: i32,
    pub meeting_url: Option<&'a str>,
}

/// Repository for course database operations
pub struct CourseRepository;

impl CourseRepository {
    /// Create a new course owned by `user_id`
    pub async fn create(pool: &PgPool, user_id: &Uuid, fields: &CourseFields<'_>) -> AppResult<Course> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (
                user_id, skill_id, name, description, start_at, end_at,
                max_participants, meeting_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(fields.skill_id)
        .bind(fields.name)
        .bind(fields.description)
        .bind(fields.start_at)
        .bind(fields.end_at)
        .bind(fields.max_participants)
        .bind(fields.meeting_url)
        .fetch_one(pool)
        .await?;

        Ok(course)
    }

    /// Overwrite every editable field of a course
    pub async fn update(pool: &PgPool, id: &Uuid, fields: &CourseFields<'_>) -> AppResult<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            UPDATE courses
            SET
                skill_id = $2,
                name = $3,
                description = $4,
                start_at = $5,
                end_at = $6,
                max_participants = $7,
                meeting_url = $8,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(fields.skill_id)
        .bind(fields.name)
        .bind(fields.description)
        .bind(fields.start_at)
        .bind(fields.end_at)
        .bind(fields.max_participants)
        .bind(fields.meeting_url)
        .fetch_optional(pool)
        .await?;

        Ok(course)
    }

    /// Find course by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(r#"SELECT * FROM courses WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(course)
    }

    /// List courses with coach and skill names, optionally for one coach user
    pub async fn list_listings(pool: &PgPool, coach_user_id: Option<&Uuid>) -> AppResult<Vec<CourseListing>> {
        let courses = sqlx::query_as::<_, CourseListing>(
            r#"
            SELECT
                c.id,
                u.name AS coach_name,
                s.name AS skill_name,
                c.name,
                c.description,
                c.start_at,
                c.end_at,
                c.max_participants
            FROM courses c
            JOIN users u ON c.user_id = u.id
            JOIN skills s ON c.skill_id = s.id
            WHERE ($1::uuid IS NULL OR c.user_id = $1)
            ORDER BY c.start_at
            "#,
        )
        .bind(coach_user_id)
        .fetch_all(pool)
        .await?;

        Ok(courses)
    }

    /// A coach's courses with their active participant counts
    pub async fn list_with_participants(
        pool: &PgPool,
        user_id: &Uuid,
    ) -> AppResult<Vec<CourseWithParticipants>> {
        let courses = sqlx::query_as::<_, CourseWithParticipants>(
            r#"
            SELECT
                c.id,
                c.name,
                c.start_at,
                c.end_at,
                c.max_participants,
                COUNT(b.id) AS participants
            FROM courses c
            LEFT JOIN course_bookings b
                ON b.course_id = c.id AND b.cancelled_at IS NULL
            WHERE c.user_id = $1
            GROUP BY c.id
            ORDER BY c.start_at
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(courses)
    }

    /// Course detail, only if owned by `user_id`
    pub async fn find_owned_with_skill(
        pool: &PgPool,
        id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Option<CourseWithSkill>> {
        let course = sqlx::query_as::<_, CourseWithSkill>(
            r#"
            SELECT
                c.id,
                s.name AS skill_name,
                c.name,
                c.description,
                c.start_at,
                c.end_at,
                c.max_participants
            FROM courses c
            JOIN skills s ON c.skill_id = s.id
            WHERE c.id = $1 AND c.user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(course)
    }

    /// Ids of a coach's courses ending in `[from, until)`
    pub async fn ids_ending_between(
        pool: &PgPool,
        user_id: &Uuid,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> AppResult<Vec<Uuid>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT id FROM courses
            WHERE user_id = $1 AND end_at >= $2 AND end_at < $3
            "#,
        )
        .bind(user_id)
        .bind(from)
        .bind(until)
        .fetch_all(pool)
        .await?;

        Ok(ids)
    }

    /// Courses the user holds an active booking for
    pub async fn list_booked_by(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<BookedCourse>> {
        let courses = sqlx::query_as::<_, BookedCourse>(
            r#"
            SELECT
                c.name,
                c.id AS course_id,
                u.name AS coach_name,
                c.start_at,
                c.end_at,
                c.meeting_url
            FROM course_bookings b
            JOIN courses c ON b.course_id = c.id
            JOIN users u ON c.user_id = u.id
            WHERE b.user_id = $1 AND b.cancelled_at IS NULL
            ORDER BY c.start_at
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(courses)
    }
}
