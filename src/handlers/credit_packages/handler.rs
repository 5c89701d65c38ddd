//! Credit package handler implementations

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    handlers::common::{empty_success, ApiResponse, AppJson},
    middleware::auth::AuthenticatedUser,
    services::{credit_package_service::INVALID_PACKAGE_ID, CreditPackageService},
    state::AppState,
    utils::parse_uuid,
};

use super::{request::CreatePackageRequest, response::PackageResponse};

/// List every package
pub async fn list_packages(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<PackageResponse>>>> {
    let packages = CreditPackageService::list(state.db()).await?;
    Ok(ApiResponse::success(
        packages.into_iter().map(PackageResponse::from).collect(),
    ))
}

/// Create a package
pub async fn create_package(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePackageRequest>,
) -> AppResult<Json<ApiResponse<PackageResponse>>> {
    payload.validate()?;

    let package = CreditPackageService::create(
        state.db(),
        payload.name.trim(),
        payload.credit_amount,
        payload.price,
    )
    .await?;

    Ok(ApiResponse::success(package.into()))
}

/// Delete a package
pub async fn delete_package(
    State(state): State<AppState>,
    Path(package_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let package_id = parse_uuid(&package_id, INVALID_PACKAGE_ID)?;
    CreditPackageService::delete(state.db(), &package_id).await?;
    Ok(empty_success())
}

/// Buy a package
pub async fn purchase_package(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(package_id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let package_id = parse_uuid(&package_id, INVALID_PACKAGE_ID)?;
    CreditPackageService::purchase(state.db(), &auth_user.id, &package_id).await?;
    Ok(empty_success())
}
