//! Coach administration request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{messages, MAX_COURSE_NAME_LENGTH},
    db::repositories::CourseFields,
    error::AppResult,
    services::CoachProfileFields,
    utils::{parse_uuid, validate_not_blank, validate_url},
};

/// Coach profile fields, used both to promote a user and to edit a profile
#[derive(Debug, Deserialize, Validate)]
pub struct CoachProfileRequest {
    #[validate(range(min = 0))]
    pub experience_years: i32,

    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,

    #[validate(custom(function = "validate_url"))]
    pub profile_image_url: Option<String>,
}

impl CoachProfileRequest {
    pub fn fields(&self) -> CoachProfileFields<'_> {
        CoachProfileFields {
            experience_years: self.experience_years,
            description: &self.description,
            profile_image_url: self.profile_image_url.as_deref(),
        }
    }
}

/// Full coach profile replacement including skill links
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCoachProfileRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub profile: CoachProfileRequest,

    pub skill_ids: Vec<String>,
}

impl UpdateCoachProfileRequest {
    /// Skill ids as UUIDs; any malformed id rejects the whole request
    pub fn parsed_skill_ids(&self) -> AppResult<Vec<Uuid>> {
        self.skill_ids
            .iter()
            .map(|id| parse_uuid(id, messages::INVALID_FIELDS))
            .collect()
    }
}

/// Course fields shared by create and update
#[derive(Debug, Deserialize, Validate)]
pub struct CourseRequest {
    pub skill_id: Uuid,

    #[validate(
        length(max = MAX_COURSE_NAME_LENGTH),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,

    pub start_at: DateTime<Utc>,

    pub end_at: DateTime<Utc>,

    #[validate(range(min = 0))]
    pub max_participants: i32,

    #[validate(custom(function = "validate_url"))]
    pub meeting_url: Option<String>,
}

impl CourseRequest {
    pub fn fields(&self) -> CourseFields<'_> {
        CourseFields {
            skill_id: self.skill_id,
            name: self.name.trim(),
            description: &self.description,
            start_at: self.start_at,
            end_at: self.end_at,
            max_participants: self.max_participants,
            meeting_url: self.meeting_url.as_deref(),
        }
    }
}

/// New course for a coach user
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    pub user_id: Uuid,

    #[serde(flatten)]
    #[validate(nested)]
    pub course: CourseRequest,
}

/// Revenue month, an English month name
#[derive(Debug, Deserialize)]
pub struct RevenueQuery {
    pub month: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_course_request_flattens_course_fields() {
        let request: CreateCourseRequest = serde_json::from_value(serde_json::json!({
            "user_id": Uuid::new_v4(),
            "skill_id": Uuid::new_v4(),
            "name": "重訓基礎課",
            "description": "第一次上課建議穿運動服",
            "start_at": "2025-01-01T16:00:00Z",
            "end_at": "2025-01-01T18:00:00Z",
            "max_participants": 10,
            "meeting_url": "https://meet.example.com/room"
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.course.fields().max_participants, 10);
    }

    #[test]
    fn test_course_request_rejects_bad_meeting_url() {
        let request: CourseRequest = serde_json::from_value(serde_json::json!({
            "skill_id": Uuid::new_v4(),
            "name": "Yoga",
            "description": "Morning flow",
            "start_at": "2025-01-01T08:00:00Z",
            "end_at": "2025-01-01T09:00:00Z",
            "max_participants": 5,
            "meeting_url": "not a url"
        }))
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_profile_request_rejects_non_http_image_url() {
        let request: CoachProfileRequest = serde_json::from_value(serde_json::json!({
            "experience_years": 3,
            "description": "Strength coach",
            "profile_image_url": "ftp://files.example.com/me.png"
        }))
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_malformed_skill_id_is_a_field_error() {
        let known = Uuid::new_v4();
        let request: UpdateCoachProfileRequest = serde_json::from_value(serde_json::json!({
            "experience_years": 3,
            "description": "Strength coach",
            "skill_ids": [known.to_string(), "not-a-uuid"]
        }))
        .unwrap();

        match request.parsed_skill_ids() {
            Err(crate::error::AppError::BadRequest(message)) => {
                assert_eq!(message, messages::INVALID_FIELDS)
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let request = UpdateCoachProfileRequest {
            skill_ids: vec![known.to_string()],
            ..request
        };
        assert_eq!(request.parsed_skill_ids().unwrap(), vec![known]);
    }

    #[test]
    fn test_profile_request_rejects_negative_experience() {
        let request: UpdateCoachProfileRequest = serde_json::from_value(serde_json::json!({
            "experience_years": -1,
            "description": "Ten years of coaching",
            "skill_ids": []
        }))
        .unwrap();

        assert!(request.validate().is_err());
    }
}
