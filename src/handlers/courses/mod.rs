//! Course catalog and booking handlers

mod handler;

pub use handler::*;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Course routes
pub fn routes(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route(
            "/{course_id}",
            post(handler::book_course).delete(handler::cancel_booking),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/", get(handler::list_courses))
        .merge(protected)
}
