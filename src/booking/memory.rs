//! In-memory booking store for tests
//!
//! A unit holds the whole state exclusively and works on a staged copy, so
//! units are serializable and an uncommitted unit leaves no trace.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use super::store::{BookingStore, BookingUnit};
use crate::{
    error::{AppError, AppResult},
    models::CourseBooking,
};

#[derive(Debug, Clone, Default)]
struct MemoryState {
    /// user id -> purchased credits
    credits: HashMap<Uuid, i64>,
    /// course id -> max participants
    courses: HashMap<Uuid, i64>,
    bookings: Vec<CourseBooking>,
}

#[derive(Clone, Default)]
pub struct MemoryBookingStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryBookingStore {
    /// Register a user holding `credits` purchased credits
    pub async fn add_user(&self, credits: i64) -> Uuid {
        let id = Uuid::new_v4();
        self.state.lock().await.credits.insert(id, credits);
        id
    }

    /// Register a course with `capacity` seats
    pub async fn add_course(&self, capacity: i64) -> Uuid {
        let id = Uuid::new_v4();
        self.state.lock().await.courses.insert(id, capacity);
        id
    }

    pub async fn bookings(&self) -> Vec<CourseBooking> {
        self.state.lock().await.bookings.clone()
    }

    /// Panics if any capacity, ledger or single-active-booking invariant is broken
    pub async fn assert_invariants(&self) {
        let state = self.state.lock().await;

        for (course_id, capacity) in &state.courses {
            let active = active_for(&state.bookings, |b| b.course_id == *course_id);
            assert!(active <= *capacity, "course {course_id} overbooked");
        }

        for (user_id, purchased) in &state.credits {
            let active = active_for(&state.bookings, |b| b.user_id == *user_id);
            assert!(active <= *purchased, "user {user_id} spent more than purchased");

            for course_id in state.courses.keys() {
                let pair = active_for(&state.bookings, |b| {
                    b.user_id == *user_id && b.course_id == *course_id
                });
                assert!(pair <= 1, "duplicate active booking for {user_id}/{course_id}");
            }
        }
    }
}

fn active_for(bookings: &[CourseBooking], filter: impl Fn(&CourseBooking) -> bool) -> i64 {
    bookings.iter().filter(|b| b.is_active() && filter(b)).count() as i64
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn begin(&self) -> AppResult<Box<dyn BookingUnit>> {
        let guard = self.state.clone().lock_owned().await;
        let staged = guard.clone();
        Ok(Box::new(MemoryUnit { guard, staged }))
    }
}

struct MemoryUnit {
    guard: OwnedMutexGuard<MemoryState>,
    staged: MemoryState,
}

#[async_trait]
impl BookingUnit for MemoryUnit {
    async fn lock_user(&mut self, user_id: Uuid) -> AppResult<bool> {
        tokio::task::yield_now().await;
        Ok(self.staged.credits.contains_key(&user_id))
    }

    async fn lock_course(&mut self, course_id: Uuid) -> AppResult<Option<i64>> {
        tokio::task::yield_now().await;
        Ok(self.staged.courses.get(&course_id).copied())
    }

    async fn course_capacity(&mut self, course_id: Uuid) -> AppResult<Option<i64>> {
        Ok(self.staged.courses.get(&course_id).copied())
    }

    async fn find_active_booking(
        &mut self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> AppResult<Option<CourseBooking>> {
        Ok(self
            .staged
            .bookings
            .iter()
            .find(|b| b.is_active() && b.user_id == user_id && b.course_id == course_id)
            .cloned())
    }

    async fn purchased_credits(&mut self, user_id: Uuid) -> AppResult<i64> {
        Ok(self.staged.credits.get(&user_id).copied().unwrap_or(0))
    }

    async fn count_user_active_bookings(&mut self, user_id: Uuid) -> AppResult<i64> {
        Ok(active_for(&self.staged.bookings, |b| b.user_id == user_id))
    }

    async fn count_course_active_bookings(&mut self, course_id: Uuid) -> AppResult<i64> {
        tokio::task::yield_now().await;
        Ok(active_for(&self.staged.bookings, |b| b.course_id == course_id))
    }

    async fn insert_booking(&mut self, booking: &CourseBooking) -> AppResult<()> {
        self.staged.bookings.push(booking.clone());
        Ok(())
    }

    async fn mark_cancelled(&mut self, booking_id: Uuid, at: DateTime<Utc>) -> AppResult<()> {
        let booking = self
            .staged
            .bookings
            .iter_mut()
            .find(|b| b.id == booking_id)
            .ok_or_else(|| AppError::Database(format!("booking {booking_id} vanished")))?;
        booking.cancel(at)?;
        Ok(())
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        let MemoryUnit { mut guard, staged } = *self;
        *guard = staged;
        Ok(())
    }
}
