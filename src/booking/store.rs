//! Persistence port for the booking core
//!
//! The core never touches a pool or a query language directly. It opens a
//! [`BookingUnit`] from a [`BookingStore`], runs its reads and writes through
//! it, and commits. Dropping a unit without committing discards its writes.
//!
//! Implementations must make the lock methods exclusive for the lifetime of
//! the unit: two units that both locked the same user (or the same course)
//! never overlap. Callers always lock the user before the course.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{error::AppResult, models::CourseBooking};

/// Source of booking units
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Open a new unit of work
    async fn begin(&self) -> AppResult<Box<dyn BookingUnit>>;
}

/// One atomic unit of booking work
#[async_trait]
pub trait BookingUnit: Send {
    /// Lock the user's ledger. Returns `false` if the user does not exist.
    async fn lock_user(&mut self, user_id: Uuid) -> AppResult<bool>;

    /// Lock the course row and return its capacity, or `None` if absent.
    async fn lock_course(&mut self, course_id: Uuid) -> AppResult<Option<i64>>;

    /// Capacity of a course without taking a lock
    async fn course_capacity(&mut self, course_id: Uuid) -> AppResult<Option<i64>>;

    /// The active booking for `(user, course)`, if any
    async fn find_active_booking(
        &mut self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> AppResult<Option<CourseBooking>>;

    /// Sum of all purchased credits for the user
    async fn purchased_credits(&mut self, user_id: Uuid) -> AppResult<i64>;

    /// Number of the user's bookings that are not cancelled
    async fn count_user_active_bookings(&mut self, user_id: Uuid) -> AppResult<i64>;

    /// Number of the course's bookings that are not cancelled
    async fn count_course_active_bookings(&mut self, course_id: Uuid) -> AppResult<i64>;

    /// Insert a new active booking
    async fn insert_booking(&mut self, booking: &CourseBooking) -> AppResult<()>;

    /// Stamp `cancelled_at` on an active booking
    async fn mark_cancelled(&mut self, booking_id: Uuid, at: DateTime<Utc>) -> AppResult<()>;

    /// Make every write of this unit durable
    async fn commit(self: Box<Self>) -> AppResult<()>;
}
