//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod coaches;
pub mod common;
pub mod courses;
pub mod credit_packages;
pub mod health;
pub mod skills;
pub mod users;

use axum::Router;

use crate::state::AppState;

pub use common::{ApiResponse, AppJson, AppQuery, ValidateInOrder};

/// Create all API routes, to be nested under `/api`
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .nest("/users", users::routes(state))
        .nest("/admin", admin::routes(state))
        .nest("/coaches/skill", skills::routes())
        .nest("/coaches", coaches::routes())
        .nest("/courses", courses::routes(state))
        .nest("/credit-package", credit_packages::routes(state))
}
