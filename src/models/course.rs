//! Course model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::booking::CourseStatus;

/// Course database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub user_id: Uuid,
    pub skill_id: Uuid,
    pub name: String,
    pub description: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub max_participants: i32,
    pub meeting_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Lifecycle status of the course at `now`
    pub fn status_at(&self, now: DateTime<Utc>) -> CourseStatus {
        CourseStatus::derive(now, self.start_at, self.end_at)
    }
}

/// Course listing row joined with coach and skill names
#[derive(Debug, Clone, FromRow)]
pub struct CourseListing {
    pub id: Uuid,
    pub coach_name: String,
    pub skill_name: String,
    pub name: String,
    pub description: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub max_participants: i32,
}

/// A coach's own course together with its active participant count
#[derive(Debug, Clone, FromRow)]
pub struct CourseWithParticipants {
    pub id: Uuid,
    pub name: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub max_participants: i32,
    pub participants: i64,
}

/// Course detail row joined with its skill name
#[derive(Debug, Clone, FromRow)]
pub struct CourseWithSkill {
    pub id: Uuid,
    pub skill_name: String,
    pub name: String,
    pub description: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub max_participants: i32,
}

/// An active booking as seen by the booker
#[derive(Debug, Clone, FromRow)]
pub struct BookedCourse {
    pub name: String,
    pub course_id: Uuid,
    pub coach_name: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub meeting_url: Option<String>,
}
