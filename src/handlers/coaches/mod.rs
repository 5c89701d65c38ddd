//! Public coach directory handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Coach routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_coaches))
        .route("/{coach_id}", get(handler::get_coach))
        .route("/{coach_id}/courses", get(handler::get_coach_courses))
}
