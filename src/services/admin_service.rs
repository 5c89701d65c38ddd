//! Coach administration service
//!
//! Promotion of users to coaches and everything a coach manages: their
//! courses, their profile and skill links, and the monthly revenue summary.

use chrono::Utc;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::Serialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    constants::{messages, roles},
    db::repositories::{
        BookingRepository, CoachRepository, CourseFields, CourseRepository, CreditRepository,
        PurchaseTotals, SkillRepository, UserRepository,
    },
    error::{AppError, AppResult},
    models::{Coach, Course, CourseWithParticipants, CourseWithSkill, User},
    utils::month_bounds_in_year_of,
};

/// Editable coach profile fields
#[derive(Debug, Clone)]
pub struct CoachProfileFields<'a> {
    pub experience_years: i32,
    pub description: &'a str,
    pub profile_image_url: Option<&'a str>,
}

/// A coach's booking totals for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevenueSummary {
    pub participants: i64,
    pub revenue: i64,
    pub course_count: i64,
}

/// Admin service for coach management
pub struct AdminService;

impl AdminService {
    /// Promote a user to coach and create the coach profile atomically
    pub async fn promote_to_coach(
        pool: &PgPool,
        user_id: &Uuid,
        profile: &CoachProfileFields<'_>,
    ) -> AppResult<(User, Coach)> {
        let mut tx = pool.begin().await?;

        let user = UserRepository::find_for_update(&mut *tx, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::USER_NOT_FOUND.to_string()))?;
        if user.is_coach() {
            return Err(AppError::Conflict(messages::ALREADY_A_COACH.to_string()));
        }

        let user = UserRepository::update_role(&mut *tx, user_id, roles::COACH).await?;
        let coach = CoachRepository::create(
            &mut *tx,
            user_id,
            profile.experience_years,
            profile.description,
            profile.profile_image_url,
        )
        .await?;

        tx.commit().await?;

        info!(%user_id, coach_id = %coach.id, "User promoted to coach");
        Ok((user, coach))
    }

    /// Create a course taught by `coach_user_id`
    pub async fn create_course(
        pool: &PgPool,
        coach_user_id: &Uuid,
        fields: &CourseFields<'_>,
    ) -> AppResult<Course> {
        Self::check_schedule(fields)?;

        let coach_user = UserRepository::find_by_id(pool, coach_user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::USER_NOT_FOUND.to_string()))?;
        if !coach_user.is_coach() {
            return Err(AppError::BadRequest(messages::NOT_A_COACH.to_string()));
        }
        Self::require_skill(pool, &fields.skill_id).await?;

        let course = CourseRepository::create(pool, coach_user_id, fields).await?;

        info!(course_id = %course.id, %coach_user_id, "Course created");
        Ok(course)
    }

    /// Overwrite a course owned by `owner_id`
    pub async fn update_course(
        pool: &PgPool,
        owner_id: &Uuid,
        course_id: &Uuid,
        fields: &CourseFields<'_>,
    ) -> AppResult<Course> {
        Self::check_schedule(fields)?;

        let course = CourseRepository::find_by_id(pool, course_id)
            .await?
            .filter(|course| course.user_id == *owner_id)
            .ok_or_else(|| AppError::NotFound(messages::COURSE_NOT_FOUND.to_string()))?;
        Self::require_skill(pool, &fields.skill_id).await?;

        CourseRepository::update(pool, &course.id, fields)
            .await?
            .ok_or_else(|| AppError::BadRequest("更新課程失敗".to_string()))
    }

    /// The caller's courses with active participant counts
    pub async fn coach_courses(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<CourseWithParticipants>> {
        CourseRepository::list_with_participants(pool, user_id).await
    }

    pub async fn coach_course_detail(
        pool: &PgPool,
        user_id: &Uuid,
        course_id: &Uuid,
    ) -> AppResult<CourseWithSkill> {
        CourseRepository::find_owned_with_skill(pool, course_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::COURSE_NOT_FOUND.to_string()))
    }

    /// The caller's coach profile and linked skill ids
    pub async fn coach_profile(pool: &PgPool, user_id: &Uuid) -> AppResult<(Coach, Vec<Uuid>)> {
        let coach = CoachRepository::find_by_user_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::COACH_NOT_FOUND.to_string()))?;
        let skill_ids = CoachRepository::skill_ids(pool, &coach.id).await?;

        Ok((coach, skill_ids))
    }

    /// Update profile fields and fully replace skill links
    pub async fn update_coach_profile(
        pool: &PgPool,
        user_id: &Uuid,
        profile: &CoachProfileFields<'_>,
        skill_ids: &[Uuid],
    ) -> AppResult<(Coach, Vec<Uuid>)> {
        let mut skill_ids = skill_ids.to_vec();
        skill_ids.sort_unstable();
        skill_ids.dedup();

        let existing = SkillRepository::count_existing(pool, &skill_ids).await?;
        if existing != skill_ids.len() as i64 {
            return Err(AppError::NotFound(messages::SKILL_NOT_FOUND.to_string()));
        }

        let mut tx = pool.begin().await?;

        let coach = CoachRepository::update_profile(
            &mut *tx,
            user_id,
            profile.experience_years,
            profile.description,
            profile.profile_image_url,
        )
        .await?
        .ok_or_else(|| AppError::NotFound(messages::COACH_NOT_FOUND.to_string()))?;
        CoachRepository::replace_skills(&mut *tx, &coach.id, &skill_ids).await?;

        tx.commit().await?;

        let skill_ids = CoachRepository::skill_ids(pool, &coach.id).await?;
        Ok((coach, skill_ids))
    }

    /// Booking totals over the caller's courses ending in `month` of this year
    pub async fn revenue(pool: &PgPool, user_id: &Uuid, month: u32) -> AppResult<RevenueSummary> {
        let (from, until) =
            month_bounds_in_year_of(Utc::now(), month).ok_or_else(AppError::invalid_fields)?;

        let course_ids = CourseRepository::ids_ending_between(pool, user_id, from, until).await?;
        let stats = BookingRepository::stats_for_courses(pool, &course_ids).await?;
        let totals = CreditRepository::totals(pool).await?;

        Ok(RevenueSummary {
            participants: stats.participants,
            revenue: per_credit_price(&totals) * stats.active_bookings,
            course_count: stats.active_bookings,
        })
    }

    fn check_schedule(fields: &CourseFields<'_>) -> AppResult<()> {
        if fields.end_at > fields.start_at {
            Ok(())
        } else {
            Err(AppError::invalid_fields())
        }
    }

    async fn require_skill(pool: &PgPool, skill_id: &Uuid) -> AppResult<()> {
        SkillRepository::find_by_id(pool, skill_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(messages::SKILL_NOT_FOUND.to_string()))
    }
}

/// Average paid price of one credit across all purchases, rounded down
fn per_credit_price(totals: &PurchaseTotals) -> i64 {
    if totals.total_credits <= 0 {
        return 0;
    }

    (totals.total_price / Decimal::from(totals.total_credits))
        .floor()
        .to_i64()
        .unwrap_or(0)
}
