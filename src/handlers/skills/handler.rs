//! Skill handler implementations

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::common::{empty_success, ApiResponse, AppJson},
    services::SkillService,
    state::AppState,
    utils::parse_uuid,
};

use super::{request::CreateSkillRequest, response::SkillResponse};

pub async fn list_skills(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<SkillResponse>>>> {
    let skills = SkillService::list(state.db()).await?;
    Ok(ApiResponse::success(
        skills.into_iter().map(SkillResponse::from).collect(),
    ))
}

pub async fn create_skill(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateSkillRequest>,
) -> AppResult<Json<ApiResponse<SkillResponse>>> {
    payload.validate()?;

    let skill = SkillService::create(state.db(), payload.name.trim()).await?;
    Ok(ApiResponse::success(skill.into()))
}

pub async fn delete_skill(
    State(state): State<AppState>,
    Path(skill_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let skill_id = parse_uuid(&skill_id, "id 錯誤")?;
    SkillService::delete(state.db(), &skill_id).await?;
    Ok(empty_success())
}
