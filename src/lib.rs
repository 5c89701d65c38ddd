//! CoachMarket - Coaching Marketplace Backend
//!
//! This library provides the REST backend for a coaching marketplace where
//! users buy credit packages and spend one credit per booked course session.
//!
//! # Features
//!
//! - Credit packages and purchases
//! - Course booking with per-user credit and per-course seat limits
//! - Coach profiles, skills and course management
//! - Monthly coach revenue summaries
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Booking**: The booking state machine over an injected store
//! - **Repositories**: Database access
//! - **Models**: Domain models

pub mod booking;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the application router without transport layers
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::health::routes())
        .nest("/api", handlers::routes(&state))
        .with_state(state)
}
