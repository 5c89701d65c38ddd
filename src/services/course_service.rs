//! Course catalog and booking entry points

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    booking::BookingService,
    db::repositories::CourseRepository,
    error::AppResult,
    models::CourseListing,
};

pub struct CourseService;

impl CourseService {
    /// Every course with coach and skill names
    pub async fn list(pool: &PgPool) -> AppResult<Vec<CourseListing>> {
        CourseRepository::list_listings(pool, None).await
    }

    pub async fn book(bookings: &BookingService, user_id: &Uuid, course_id: &Uuid) -> AppResult<()> {
        bookings.create_booking(*user_id, *course_id).await
    }

    pub async fn cancel(bookings: &BookingService, user_id: &Uuid, course_id: &Uuid) -> AppResult<()> {
        bookings.cancel_booking(*user_id, *course_id).await
    }
}
