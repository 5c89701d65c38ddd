//! Authentication middleware

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::{
    db::repositories::{CoachRepository, UserRepository},
    error::AppError,
    services::AuthService,
    state::AppState,
};

/// Authenticated user, re-loaded from the database on every request
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub name: String,
    pub role: String,
}

impl AuthenticatedUser {
    pub fn is_coach(&self) -> bool {
        self.role == crate::constants::roles::COACH
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Require a valid bearer token for an existing user
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_owned();

    let Some(token) = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
    else {
        debug!(%path, "Auth failed: missing bearer token");
        return Err(AppError::Unauthorized);
    };

    let claims = AuthService::verify_token(token.trim(), &state.config().jwt.secret)
        .inspect_err(|e| debug!(%path, error = ?e, "Auth failed: token verification failed"))?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
        debug!(%path, sub = %claims.sub, "Auth failed: malformed subject");
        AppError::InvalidToken
    })?;

    let user = UserRepository::find_by_id(state.db(), &user_id)
        .await?
        .ok_or_else(|| {
            debug!(%path, %user_id, "Auth failed: user no longer exists");
            AppError::InvalidToken
        })?;

    debug!(%path, %user_id, role = %user.role, "User authenticated");

    request.extensions_mut().insert(AuthenticatedUser {
        id: user.id,
        name: user.name,
        role: user.role,
    });
    Ok(next.run(request).await)
}

/// Require the authenticated user to be a coach with a profile.
/// Must run after [`auth_middleware`].
pub async fn coach_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or(AppError::Unauthorized)?;

    if !user.is_coach() {
        debug!(user_id = %user.id, "Coach check failed: role is {}", user.role);
        return Err(AppError::NotCoach);
    }

    if CoachRepository::find_by_user_id(state.db(), &user.id).await?.is_none() {
        debug!(user_id = %user.id, "Coach check failed: no coach profile");
        return Err(AppError::NotCoach);
    }

    Ok(next.run(request).await)
}
