//! Course booking model
//!
//! Rows are soft-cancelled: cancellation stamps `cancelled_at` and the row is
//! kept for ledger and capacity history. In code the nullable column is
//! lifted into [`BookingState`] so every transition is explicit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::booking::BookingRejection;

/// Raw `course_bookings` row
#[derive(Debug, Clone, FromRow)]
pub struct CourseBookingRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub booking_at: DateTime<Utc>,
    pub cancelled_at: Option<DateTime<Utc>>,
}

/// Lifecycle of a single booking row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum BookingState {
    Active {
        booked_at: DateTime<Utc>,
    },
    Cancelled {
        booked_at: DateTime<Utc>,
        cancelled_at: DateTime<Utc>,
    },
}

impl BookingState {
    pub fn booked_at(&self) -> DateTime<Utc> {
        match *self {
            Self::Active { booked_at } | Self::Cancelled { booked_at, .. } => booked_at,
        }
    }

    pub fn cancelled_at(&self) -> Option<DateTime<Utc>> {
        match *self {
            Self::Active { .. } => None,
            Self::Cancelled { cancelled_at, .. } => Some(cancelled_at),
        }
    }
}

/// A booking of one course session by one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseBooking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub state: BookingState,
}

impl CourseBooking {
    /// A freshly created, active booking
    pub fn new_active(user_id: Uuid, course_id: Uuid, booked_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            course_id,
            state: BookingState::Active { booked_at },
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, BookingState::Active { .. })
    }

    /// `ACTIVE -> CANCELLED`. A cancelled row is terminal.
    pub fn cancel(&mut self, at: DateTime<Utc>) -> Result<(), BookingRejection> {
        match self.state {
            BookingState::Active { booked_at } => {
                self.state = BookingState::Cancelled {
                    booked_at,
                    cancelled_at: at,
                };
                Ok(())
            }
            BookingState::Cancelled { .. } => Err(BookingRejection::NotBooked),
        }
    }
}

impl From<CourseBookingRow> for CourseBooking {
    fn from(row: CourseBookingRow) -> Self {
        let state = match row.cancelled_at {
            None => BookingState::Active {
                booked_at: row.booking_at,
            },
            Some(cancelled_at) => BookingState::Cancelled {
                booked_at: row.booking_at,
                cancelled_at,
            },
        };

        Self {
            id: row.id,
            user_id: row.user_id,
            course_id: row.course_id,
            state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_row_without_cancellation_is_active() {
        let now = Utc::now();
        let booking = CourseBooking::from(CourseBookingRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            booking_at: now,
            cancelled_at: None,
        });

        assert!(booking.is_active());
        assert_eq!(booking.state.booked_at(), now);
        assert_eq!(booking.state.cancelled_at(), None);
    }

    #[test]
    fn test_cancel_is_terminal() {
        let now = Utc::now();
        let mut booking = CourseBooking::new_active(Uuid::new_v4(), Uuid::new_v4(), now);

        let later = now + Duration::minutes(5);
        booking.cancel(later).unwrap();
        assert!(!booking.is_active());
        assert_eq!(booking.state.cancelled_at(), Some(later));
        assert_eq!(booking.state.booked_at(), now);

        assert_eq!(
            booking.cancel(later + Duration::minutes(1)),
            Err(BookingRejection::NotBooked)
        );
        // the first cancellation timestamp is preserved
        assert_eq!(booking.state.cancelled_at(), Some(later));
    }
}
