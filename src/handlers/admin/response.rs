//! Coach administration response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    booking::CourseStatus,
    handlers::coaches::{CoachProfile, CoachUser},
    models::{Coach, Course, CourseWithParticipants, CourseWithSkill},
    services::RevenueSummary,
};

#[derive(Debug, Serialize)]
pub struct PromoteCoachResponse {
    pub user: CoachUser,
    pub coach: CoachProfile,
}

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub course: Course,
}

/// A coach's own course with status and participant count
#[derive(Debug, Serialize)]
pub struct CoachCourseSummary {
    pub id: Uuid,
    pub status: &'static str,
    pub name: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub max_participants: i32,
    pub participants: i64,
}

impl CoachCourseSummary {
    pub fn at(course: CourseWithParticipants, now: DateTime<Utc>) -> Self {
        let status = CourseStatus::derive(now, course.start_at, course.end_at);
        Self {
            id: course.id,
            status: status.coach_label(),
            name: course.name,
            start_at: course.start_at,
            end_at: course.end_at,
            max_participants: course.max_participants,
            participants: course.participants,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CoachCourseDetail {
    pub id: Uuid,
    pub skill_name: String,
    pub name: String,
    pub description: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub max_participants: i32,
}

impl From<CourseWithSkill> for CoachCourseDetail {
    fn from(c: CourseWithSkill) -> Self {
        Self {
            id: c.id,
            skill_name: c.skill_name,
            name: c.name,
            description: c.description,
            start_at: c.start_at,
            end_at: c.end_at,
            max_participants: c.max_participants,
        }
    }
}

/// The caller's own coach profile
#[derive(Debug, Serialize)]
pub struct OwnCoachProfile {
    pub id: Uuid,
    pub experience_years: i32,
    pub description: String,
    pub profile_image_url: Option<String>,
    pub skill_ids: Vec<Uuid>,
}

impl OwnCoachProfile {
    pub fn new(coach: Coach, skill_ids: Vec<Uuid>) -> Self {
        Self {
            id: coach.id,
            experience_years: coach.experience_years,
            description: coach.description,
            profile_image_url: coach.profile_image_url,
            skill_ids,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RevenueResponse {
    pub total: RevenueSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_coach_course_summary_labels() {
        let now = Utc::now();
        let course = CourseWithParticipants {
            id: Uuid::new_v4(),
            name: "Pilates".to_string(),
            start_at: now + Duration::hours(1),
            end_at: now + Duration::hours(2),
            max_participants: 8,
            participants: 3,
        };

        let upcoming = CoachCourseSummary::at(course.clone(), now);
        assert_eq!(upcoming.status, "尚未開始");
        assert_eq!(upcoming.participants, 3);

        let open = CoachCourseSummary::at(course.clone(), now + Duration::minutes(90));
        assert_eq!(open.status, "報名中");

        let ended = CoachCourseSummary::at(course, now + Duration::hours(2));
        assert_eq!(ended.status, "已結束");
    }
}
