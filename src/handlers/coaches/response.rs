//! Coach directory response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    db::repositories::CoachName,
    models::{Coach, CoachWithUser, CourseListing},
};

#[derive(Debug, Serialize)]
pub struct CoachSummary {
    pub id: Uuid,
    pub name: String,
}

impl From<CoachName> for CoachSummary {
    fn from(coach: CoachName) -> Self {
        Self {
            id: coach.id,
            name: coach.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CoachUser {
    pub name: String,
    pub role: String,
}

/// Public coach profile
#[derive(Debug, Serialize)]
pub struct CoachProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub experience_years: i32,
    pub description: String,
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Coach> for CoachProfile {
    fn from(coach: Coach) -> Self {
        Self {
            id: coach.id,
            user_id: coach.user_id,
            experience_years: coach.experience_years,
            description: coach.description,
            profile_image_url: coach.profile_image_url,
            created_at: coach.created_at,
            updated_at: coach.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CoachDetailResponse {
    pub user: CoachUser,
    pub coach: CoachProfile,
}

impl From<CoachWithUser> for CoachDetailResponse {
    fn from(c: CoachWithUser) -> Self {
        Self {
            user: CoachUser {
                name: c.user_name,
                role: c.user_role,
            },
            coach: CoachProfile {
                id: c.id,
                user_id: c.user_id,
                experience_years: c.experience_years,
                description: c.description,
                profile_image_url: c.profile_image_url,
                created_at: c.created_at,
                updated_at: c.updated_at,
            },
        }
    }
}

/// Course as listed publicly
#[derive(Debug, Serialize)]
pub struct CourseListingResponse {
    pub id: Uuid,
    pub coach_name: String,
    pub skill_name: String,
    pub name: String,
    pub description: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub max_participants: i32,
}

impl From<CourseListing> for CourseListingResponse {
    fn from(c: CourseListing) -> Self {
        Self {
            id: c.id,
            coach_name: c.coach_name,
            skill_name: c.skill_name,
            name: c.name,
            description: c.description,
            start_at: c.start_at,
            end_at: c.end_at,
            max_participants: c.max_participants,
        }
    }
}
