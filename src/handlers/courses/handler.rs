//! Course handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    constants::messages,
    error::AppResult,
    handlers::{
        coaches::CourseListingResponse,
        common::{empty_success, ApiResponse},
    },
    middleware::auth::AuthenticatedUser,
    services::CourseService,
    state::AppState,
    utils::parse_uuid,
};

/// Every course on the platform
pub async fn list_courses(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<CourseListingResponse>>>> {
    let courses = CourseService::list(state.db()).await?;
    Ok(ApiResponse::success(
        courses.into_iter().map(CourseListingResponse::from).collect(),
    ))
}

/// Book a seat on a course
pub async fn book_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(course_id): Path<String>,
) -> AppResult<(StatusCode, Json<ApiResponse<()>>)> {
    let course_id = parse_uuid(&course_id, messages::INVALID_FIELDS)?;
    CourseService::book(state.bookings(), &auth_user.id, &course_id).await?;
    Ok((StatusCode::CREATED, empty_success()))
}

/// Cancel the caller's active booking on a course
pub async fn cancel_booking(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(course_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let course_id = parse_uuid(&course_id, messages::INVALID_FIELDS)?;
    CourseService::cancel(state.bookings(), &auth_user.id, &course_id).await?;
    Ok(empty_success())
}
