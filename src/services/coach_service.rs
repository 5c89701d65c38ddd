//! Public coach directory

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::messages,
    db::repositories::{CoachName, CoachRepository, CourseRepository},
    error::{AppError, AppResult},
    models::{CoachWithUser, CourseListing},
};

/// Coach directory service
pub struct CoachService;

impl CoachService {
    /// List coaches, `page` is 1-based
    pub async fn list(pool: &PgPool, page: u32, per: u32) -> AppResult<Vec<CoachName>> {
        let offset = (i64::from(page) - 1) * i64::from(per);
        CoachRepository::list(pool, offset, i64::from(per)).await
    }

    pub async fn get(pool: &PgPool, coach_id: &Uuid) -> AppResult<CoachWithUser> {
        CoachRepository::find_with_user(pool, coach_id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::COACH_NOT_FOUND.to_string()))
    }

    /// Courses taught by a coach
    pub async fn courses(pool: &PgPool, coach_id: &Uuid) -> AppResult<Vec<CourseListing>> {
        let coach = Self::get(pool, coach_id).await?;
        CourseRepository::list_listings(pool, Some(&coach.user_id)).await
    }
}
