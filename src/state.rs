//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    booking::{BookingService, BookingStore},
    config::Config,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    pub db: PgPool,

    /// Booking core over the injected store
    pub bookings: BookingService,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: PgPool, booking_store: Arc<dyn BookingStore>, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                db,
                bookings: BookingService::new(booking_store),
                config,
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get a reference to the booking service
    pub fn bookings(&self) -> &BookingService {
        &self.inner.bookings
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
