//! Skill catalog handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::state::AppState;

/// Skill routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_skills).post(handler::create_skill))
        .route("/{skill_id}", delete(handler::delete_skill))
}
