//! Course booking core
//!
//! Decides whether a user may book or cancel a course session. Every decision
//! is taken inside one [`BookingUnit`] that holds the user's ledger lock and
//! the course's row lock, so the checks and the write cannot interleave with
//! a competing request.
//!
//! # Create preconditions (first failure wins)
//!
//! 1. the course exists
//! 2. the user has no active booking for it
//! 3. the user has unspent credit
//! 4. the course has a free seat

pub mod capacity;
pub mod ledger;
#[cfg(test)]
pub mod memory;
pub mod status;
pub mod store;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    constants::messages,
    error::{AppError, AppResult},
    models::{Course, CourseBooking},
};

pub use capacity::SeatUsage;
pub use ledger::CreditLedger;
pub use status::CourseStatus;
pub use store::{BookingStore, BookingUnit};

/// Why a booking or cancellation was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BookingRejection {
    #[error("課程不存在")]
    CourseNotFound,

    #[error("已經報名過此課程")]
    AlreadyBooked,

    #[error("已無可使用堂數")]
    NoCreditsRemaining,

    #[error("已達最大參加人數，無法參加")]
    CourseFull,

    #[error("課程不存在或已取消")]
    NotBooked,
}

/// What a create decision reads for an existing course, under the unit's locks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateSnapshot {
    pub already_booked: bool,
    pub ledger: CreditLedger,
    pub seats: SeatUsage,
}

impl CreateSnapshot {
    /// Remaining create preconditions, in order
    pub fn check(&self) -> Result<(), BookingRejection> {
        if self.already_booked {
            Err(BookingRejection::AlreadyBooked)
        } else if !self.ledger.has_credit() {
            Err(BookingRejection::NoCreditsRemaining)
        } else if self.seats.is_full() {
            Err(BookingRejection::CourseFull)
        } else {
            Ok(())
        }
    }
}

/// Booking state machine over an injected store
#[derive(Clone)]
pub struct BookingService {
    store: Arc<dyn BookingStore>,
}

impl BookingService {
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self { store }
    }

    /// `NONE -> ACTIVE` for `(user, course)`
    pub async fn create_booking(&self, user_id: Uuid, course_id: Uuid) -> AppResult<()> {
        let mut unit = self.store.begin().await?;
        lock_user(unit.as_mut(), user_id).await?;

        let Some(capacity) = unit.lock_course(course_id).await? else {
            return Err(reject(user_id, course_id, BookingRejection::CourseNotFound));
        };

        let snapshot = CreateSnapshot {
            already_booked: unit.find_active_booking(user_id, course_id).await?.is_some(),
            ledger: CreditLedger::new(
                unit.purchased_credits(user_id).await?,
                unit.count_user_active_bookings(user_id).await?,
            ),
            seats: SeatUsage::new(unit.count_course_active_bookings(course_id).await?, capacity),
        };
        snapshot
            .check()
            .map_err(|reason| reject(user_id, course_id, reason))?;
        let CreateSnapshot { ledger, seats, .. } = snapshot;

        let booking = CourseBooking::new_active(user_id, course_id, Utc::now());
        unit.insert_booking(&booking).await?;
        unit.commit().await?;

        info!(
            %user_id,
            %course_id,
            booking_id = %booking.id,
            credits_left = ledger.remaining() - 1,
            seats_left = seats.seats_left() - 1,
            "Course booked"
        );
        Ok(())
    }

    /// `ACTIVE -> CANCELLED` for `(user, course)`
    pub async fn cancel_booking(&self, user_id: Uuid, course_id: Uuid) -> AppResult<()> {
        let mut unit = self.store.begin().await?;
        lock_user(unit.as_mut(), user_id).await?;

        if unit.lock_course(course_id).await?.is_none() {
            return Err(reject(user_id, course_id, BookingRejection::CourseNotFound));
        }

        let mut booking = unit
            .find_active_booking(user_id, course_id)
            .await?
            .ok_or(BookingRejection::NotBooked)
            .inspect_err(|reason| log_rejection(user_id, course_id, reason))?;

        let now = Utc::now();
        booking.cancel(now)?;
        unit.mark_cancelled(booking.id, now).await?;
        unit.commit().await?;

        info!(%user_id, %course_id, booking_id = %booking.id, "Course booking cancelled");
        Ok(())
    }

    /// Purchased credits minus active bookings. May be negative.
    pub async fn remaining_credits(&self, user_id: Uuid) -> AppResult<i64> {
        Ok(self.ledger(user_id).await?.remaining())
    }

    /// The user's full ledger position
    pub async fn ledger(&self, user_id: Uuid) -> AppResult<CreditLedger> {
        let mut unit = self.store.begin().await?;
        Ok(CreditLedger::new(
            unit.purchased_credits(user_id).await?,
            unit.count_user_active_bookings(user_id).await?,
        ))
    }

    pub async fn active_participant_count(&self, course_id: Uuid) -> AppResult<i64> {
        let mut unit = self.store.begin().await?;
        unit.count_course_active_bookings(course_id).await
    }

    pub async fn capacity(&self, course_id: Uuid) -> AppResult<i64> {
        let mut unit = self.store.begin().await?;
        unit.course_capacity(course_id)
            .await?
            .ok_or_else(|| AppError::from(BookingRejection::CourseNotFound))
    }

    /// Lifecycle status of `course` at `now`
    pub fn course_status(now: DateTime<Utc>, course: &Course) -> CourseStatus {
        course.status_at(now)
    }
}

async fn lock_user(unit: &mut dyn BookingUnit, user_id: Uuid) -> AppResult<()> {
    if unit.lock_user(user_id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound(messages::USER_NOT_FOUND.to_string()))
    }
}

fn reject(user_id: Uuid, course_id: Uuid, reason: BookingRejection) -> AppError {
    log_rejection(user_id, course_id, &reason);
    reason.into()
}

fn log_rejection(user_id: Uuid, course_id: Uuid, reason: &BookingRejection) {
    debug!(%user_id, %course_id, ?reason, "Booking request rejected");
}
