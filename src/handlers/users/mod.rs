//! User account handlers

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

use crate::{middleware::auth::auth_middleware, state::AppState};

/// User routes
pub fn routes(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/profile", get(handler::get_profile).put(handler::update_profile))
        .route("/password", put(handler::update_password))
        .route("/credit-package", get(handler::get_purchases))
        .route("/courses", get(handler::get_booked_courses))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/signup", post(handler::signup))
        .route("/login", post(handler::login))
        .merge(protected)
}
