//! Course booking repository
//!
//! [`PgBookingStore`] backs the booking core with a Postgres transaction per
//! unit. Locks are row locks (`FOR UPDATE`) on `users` and `courses`, held
//! until the transaction commits or is dropped.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    booking::{BookingRejection, BookingStore, BookingUnit},
    error::{AppError, AppResult},
    models::{CourseBooking, CourseBookingRow},
};

/// Partial unique index over active `(user_id, course_id)` pairs
const ACTIVE_BOOKING_INDEX: &str = "course_bookings_active_uidx";

/// Active booking statistics over a set of courses
#[derive(Debug, Default, sqlx::FromRow)]
pub struct BookingStats {
    pub participants: i64,
    pub active_bookings: i64,
}

/// Postgres-backed [`BookingStore`]
#[derive(Clone)]
pub struct PgBookingStore {
    pool: PgPool,
}

impl PgBookingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn begin(&self) -> AppResult<Box<dyn BookingUnit>> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgBookingUnit { tx }))
    }
}

/// One booking transaction
pub struct PgBookingUnit {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl BookingUnit for PgBookingUnit {
    async fn lock_user(&mut self, user_id: Uuid) -> AppResult<bool> {
        let row: Option<Uuid> = sqlx::query_scalar(r#"SELECT id FROM users WHERE id = $1 FOR UPDATE"#)
            .bind(user_id)
            .fetch_optional(&mut *self.tx)
            .await?;

        Ok(row.is_some())
    }

    async fn lock_course(&mut self, course_id: Uuid) -> AppResult<Option<i64>> {
        let capacity: Option<i32> = sqlx::query_scalar(
            r#"SELECT max_participants FROM courses WHERE id = $1 FOR UPDATE"#,
        )
        .bind(course_id)
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(capacity.map(i64::from))
    }

    async fn course_capacity(&mut self, course_id: Uuid) -> AppResult<Option<i64>> {
        let capacity: Option<i32> =
            sqlx::query_scalar(r#"SELECT max_participants FROM courses WHERE id = $1"#)
                .bind(course_id)
                .fetch_optional(&mut *self.tx)
                .await?;

        Ok(capacity.map(i64::from))
    }

    async fn find_active_booking(
        &mut self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> AppResult<Option<CourseBooking>> {
        let row = sqlx::query_as::<_, CourseBookingRow>(
            r#"
            SELECT id, user_id, course_id, booking_at, cancelled_at
            FROM course_bookings
            WHERE user_id = $1 AND course_id = $2 AND cancelled_at IS NULL
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(row.map(CourseBooking::from))
    }

    async fn purchased_credits(&mut self, user_id: Uuid) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(purchased_credits), 0)::BIGINT
            FROM credit_purchases
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(total)
    }

    async fn count_user_active_bookings(&mut self, user_id: Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM course_bookings WHERE user_id = $1 AND cancelled_at IS NULL"#,
        )
        .bind(user_id)
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(count)
    }

    async fn count_course_active_bookings(&mut self, course_id: Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM course_bookings WHERE course_id = $1 AND cancelled_at IS NULL"#,
        )
        .bind(course_id)
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(count)
    }

    async fn insert_booking(&mut self, booking: &CourseBooking) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO course_bookings (id, user_id, course_id, booking_at, cancelled_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(booking.id)
        .bind(booking.user_id)
        .bind(booking.course_id)
        .bind(booking.state.booked_at())
        .bind(booking.state.cancelled_at())
        .execute(&mut *self.tx)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err))
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some(ACTIVE_BOOKING_INDEX) =>
            {
                Err(AppError::Booking(BookingRejection::AlreadyBooked))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn mark_cancelled(&mut self, booking_id: Uuid, at: DateTime<Utc>) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE course_bookings
            SET cancelled_at = $2
            WHERE id = $1 AND cancelled_at IS NULL
            "#,
        )
        .bind(booking_id)
        .bind(at)
        .execute(&mut *self.tx)
        .await?;

        Ok(())
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        self.tx.commit().await?;
        Ok(())
    }
}

/// Read-only booking queries outside the booking core
pub struct BookingRepository;

impl BookingRepository {
    /// Distinct bookers and active bookings over `course_ids`
    pub async fn stats_for_courses(pool: &PgPool, course_ids: &[Uuid]) -> AppResult<BookingStats> {
        if course_ids.is_empty() {
            return Ok(BookingStats::default());
        }

        let stats = sqlx::query_as::<_, BookingStats>(
            r#"
            SELECT
                COUNT(DISTINCT user_id) AS participants,
                COUNT(*) AS active_bookings
            FROM course_bookings
            WHERE course_id = ANY($1) AND cancelled_at IS NULL
            "#,
        )
        .bind(course_ids)
        .fetch_one(pool)
        .await?;

        Ok(stats)
    }
}
