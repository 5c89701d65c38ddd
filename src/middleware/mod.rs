//! HTTP middleware

pub mod auth;

pub use auth::{auth_middleware, coach_middleware, AuthenticatedUser};
