//! Coach directory handler implementations

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::{
    constants::messages,
    error::AppResult,
    handlers::common::{ApiResponse, AppQuery},
    services::CoachService,
    state::AppState,
    utils::parse_uuid,
};

use super::{
    request::ListCoachesQuery,
    response::{CoachDetailResponse, CoachSummary, CourseListingResponse},
};

/// List coaches page by page
pub async fn list_coaches(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListCoachesQuery>,
) -> AppResult<Json<ApiResponse<Vec<CoachSummary>>>> {
    query.validate()?;

    let coaches = CoachService::list(state.db(), query.page, query.per).await?;
    Ok(ApiResponse::success(
        coaches.into_iter().map(CoachSummary::from).collect(),
    ))
}

/// Coach detail with the owning user's name and role
pub async fn get_coach(
    State(state): State<AppState>,
    Path(coach_id): Path<String>,
) -> AppResult<Json<ApiResponse<CoachDetailResponse>>> {
    let coach_id = parse_uuid(&coach_id, messages::INVALID_FIELDS)?;
    let coach = CoachService::get(state.db(), &coach_id).await?;
    Ok(ApiResponse::success(coach.into()))
}

/// Courses taught by a coach
pub async fn get_coach_courses(
    State(state): State<AppState>,
    Path(coach_id): Path<String>,
) -> AppResult<Json<ApiResponse<Vec<CourseListingResponse>>>> {
    let coach_id = parse_uuid(&coach_id, messages::INVALID_FIELDS)?;
    let courses = CoachService::courses(state.db(), &coach_id).await?;
    Ok(ApiResponse::success(
        courses.into_iter().map(CourseListingResponse::from).collect(),
    ))
}
