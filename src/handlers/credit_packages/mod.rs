//! Credit package handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Credit package routes
pub fn routes(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/{credit_package_id}", post(handler::purchase_package))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/", get(handler::list_packages).post(handler::create_package))
        .route("/{credit_package_id}", delete(handler::delete_package))
        .merge(protected)
}
