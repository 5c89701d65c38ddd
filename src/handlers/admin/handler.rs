//! Coach administration handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    constants::messages,
    error::{AppError, AppResult},
    handlers::{
        coaches::{CoachProfile, CoachUser},
        common::{ApiResponse, AppJson, AppQuery},
    },
    middleware::auth::AuthenticatedUser,
    services::AdminService,
    state::AppState,
    utils::{month_from_name, parse_uuid},
};

use super::{
    request::{
        CoachProfileRequest, CourseRequest, CreateCourseRequest, RevenueQuery,
        UpdateCoachProfileRequest,
    },
    response::{
        CoachCourseDetail, CoachCourseSummary, CourseResponse, OwnCoachProfile,
        PromoteCoachResponse, RevenueResponse,
    },
};

/// Promote a user to coach
pub async fn promote_to_coach(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    AppJson(payload): AppJson<CoachProfileRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<PromoteCoachResponse>>)> {
    let user_id = parse_uuid(&user_id, messages::INVALID_FIELDS)?;
    payload.validate()?;

    let (user, coach) = AdminService::promote_to_coach(state.db(), &user_id, &payload.fields()).await?;

    let response = PromoteCoachResponse {
        user: CoachUser {
            name: user.name,
            role: user.role,
        },
        coach: CoachProfile::from(coach),
    };

    Ok((StatusCode::CREATED, ApiResponse::success(response)))
}

/// Create a course for a coach user
pub async fn create_course(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCourseRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<CourseResponse>>)> {
    payload.validate()?;

    let course =
        AdminService::create_course(state.db(), &payload.user_id, &payload.course.fields()).await?;

    Ok((StatusCode::CREATED, ApiResponse::success(CourseResponse { course })))
}

/// Edit one of the caller's courses
pub async fn update_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(course_id): Path<String>,
    AppJson(payload): AppJson<CourseRequest>,
) -> AppResult<Json<ApiResponse<CourseResponse>>> {
    let course_id = parse_uuid(&course_id, messages::INVALID_FIELDS)?;
    payload.validate()?;

    let course =
        AdminService::update_course(state.db(), &auth_user.id, &course_id, &payload.fields()).await?;

    Ok(ApiResponse::success(CourseResponse { course }))
}

/// The caller's courses with status and participants
pub async fn list_own_courses(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ApiResponse<Vec<CoachCourseSummary>>>> {
    let courses = AdminService::coach_courses(state.db(), &auth_user.id).await?;
    let now = Utc::now();

    Ok(ApiResponse::success(
        courses
            .into_iter()
            .map(|course| CoachCourseSummary::at(course, now))
            .collect(),
    ))
}

/// Detail of one of the caller's courses
pub async fn get_own_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(course_id): Path<String>,
) -> AppResult<Json<ApiResponse<CoachCourseDetail>>> {
    let course_id = parse_uuid(&course_id, messages::INVALID_FIELDS)?;
    let course = AdminService::coach_course_detail(state.db(), &auth_user.id, &course_id).await?;
    Ok(ApiResponse::success(course.into()))
}

/// The caller's coach profile
pub async fn get_own_profile(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ApiResponse<OwnCoachProfile>>> {
    let (coach, skill_ids) = AdminService::coach_profile(state.db(), &auth_user.id).await?;
    Ok(ApiResponse::success(OwnCoachProfile::new(coach, skill_ids)))
}

/// Replace the caller's coach profile and skills
pub async fn update_own_profile(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    AppJson(payload): AppJson<UpdateCoachProfileRequest>,
) -> AppResult<Json<ApiResponse<OwnCoachProfile>>> {
    payload.validate()?;
    let skill_ids = payload.parsed_skill_ids()?;

    let (coach, skill_ids) = AdminService::update_coach_profile(
        state.db(),
        &auth_user.id,
        &payload.profile.fields(),
        &skill_ids,
    )
    .await?;

    Ok(ApiResponse::success(OwnCoachProfile::new(coach, skill_ids)))
}

/// Monthly booking totals for the caller
pub async fn get_revenue(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    AppQuery(query): AppQuery<RevenueQuery>,
) -> AppResult<Json<ApiResponse<RevenueResponse>>> {
    let month = month_from_name(&query.month).ok_or_else(AppError::invalid_fields)?;

    let total = AdminService::revenue(state.db(), &auth_user.id, month).await?;
    Ok(ApiResponse::success(RevenueResponse { total }))
}
