//! Course lifecycle status

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Three-way partition of a course's time window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseStatus {
    NotStarted,
    Open,
    Ended,
}

impl CourseStatus {
    /// `now == start_at` is already open, `now == end_at` is already ended.
    pub fn derive(now: DateTime<Utc>, start_at: DateTime<Utc>, end_at: DateTime<Utc>) -> Self {
        if now < start_at {
            Self::NotStarted
        } else if now < end_at {
            Self::Open
        } else {
            Self::Ended
        }
    }

    /// Label shown to the coach who owns the course
    pub fn coach_label(&self) -> &'static str {
        match self {
            Self::NotStarted => "尚未開始",
            Self::Open => "報名中",
            Self::Ended => "已結束",
        }
    }

    /// Label shown to a user who booked the course
    pub fn booker_label(&self) -> &'static str {
        match self {
            Self::NotStarted => "PENDING",
            Self::Open => "PROGRESS",
            Self::Ended => "COMPLETED",
        }
    }
}
