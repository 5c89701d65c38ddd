//! Coach administration handlers
//!
//! Every route requires a bearer token. Course and profile management
//! additionally require the caller to be a coach.

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::{
    middleware::auth::{auth_middleware, coach_middleware},
    state::AppState,
};

/// Admin routes
pub fn routes(state: &AppState) -> Router<AppState> {
    let coach_only = Router::new()
        .route(
            "/coaches",
            get(handler::get_own_profile).put(handler::update_own_profile),
        )
        .route(
            "/coaches/courses",
            get(handler::list_own_courses).post(handler::create_course),
        )
        .route(
            "/coaches/courses/{course_id}",
            get(handler::get_own_course).put(handler::update_course),
        )
        .route("/coaches/revenue", get(handler::get_revenue))
        .route_layer(middleware::from_fn_with_state(state.clone(), coach_middleware));

    Router::new()
        .route("/coaches/{user_id}", post(handler::promote_to_coach))
        .merge(coach_only)
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}
