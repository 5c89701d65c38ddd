//! User handler implementations

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;

use crate::{
    error::AppResult,
    handlers::common::{empty_success, ApiResponse, AppJson, ValidateInOrder},
    middleware::auth::AuthenticatedUser,
    services::{AuthService, UserService},
    state::AppState,
};

use super::{
    request::{LoginRequest, SignupRequest, UpdatePasswordRequest, UpdateProfileRequest},
    response::{
        BookedCoursesResponse, CreatedUser, LoginResponse, ProfileResponse, PurchaseResponse,
        SignupResponse, UpdateProfileResponse, UserName,
    },
};

/// Register a new user
pub async fn signup(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SignupRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<SignupResponse>>)> {
    payload.validate_in_order()?;

    let user = AuthService::signup(state.db(), &payload.name, &payload.email, &payload.password).await?;

    let response = SignupResponse {
        user: CreatedUser {
            id: user.id,
            name: user.name,
        },
    };

    Ok((StatusCode::CREATED, ApiResponse::success(response)))
}

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    payload.validate_in_order()?;

    let (user, token) = AuthService::login(
        state.db(),
        &state.config().jwt,
        &payload.email,
        &payload.password,
    )
    .await?;

    Ok(ApiResponse::success(LoginResponse {
        token,
        user: UserName { name: user.name },
    }))
}

/// Current user's profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ApiResponse<ProfileResponse>>> {
    let user = UserService::get_user_by_id(state.db(), &auth_user.id).await?;
    Ok(ApiResponse::success(user.into()))
}

/// Change the display name
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    AppJson(payload): AppJson<UpdateProfileRequest>,
) -> AppResult<Json<ApiResponse<UpdateProfileResponse>>> {
    payload.validate_in_order()?;

    let user = UserService::update_name(state.db(), &auth_user.id, &payload.name).await?;

    Ok(ApiResponse::success(UpdateProfileResponse {
        user: UserName { name: user.name },
    }))
}

/// Change the password
pub async fn update_password(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    AppJson(payload): AppJson<UpdatePasswordRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    payload.validate_in_order()?;

    UserService::change_password(
        state.db(),
        &auth_user.id,
        &payload.password,
        &payload.new_password,
        &payload.confirm_new_password,
    )
    .await?;

    Ok(empty_success())
}

/// Purchase history
pub async fn get_purchases(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ApiResponse<Vec<PurchaseResponse>>>> {
    let purchases = UserService::purchases(state.db(), &auth_user.id).await?;
    Ok(ApiResponse::success(
        purchases.into_iter().map(PurchaseResponse::from).collect(),
    ))
}

/// Active bookings with remaining credits
pub async fn get_booked_courses(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ApiResponse<BookedCoursesResponse>>> {
    let (ledger, courses) =
        UserService::booked_courses(state.db(), state.bookings(), &auth_user.id).await?;

    Ok(ApiResponse::success(BookedCoursesResponse::new(
        ledger,
        courses,
        Utc::now(),
    )))
}
