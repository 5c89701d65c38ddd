//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{booking::BookingRejection, constants::messages};

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("使用者不存在或密碼輸入錯誤")]
    InvalidCredentials,

    #[error("{}", messages::INVALID_TOKEN)]
    InvalidToken,

    #[error("{}", messages::TOKEN_EXPIRED)]
    TokenExpired,

    #[error("{}", messages::LOGIN_REQUIRED)]
    Unauthorized,

    #[error("{}", messages::NOT_A_COACH)]
    NotCoach,

    // Validation errors
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    // Resource errors
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    // Booking decisions
    #[error(transparent)]
    Booking(#[from] BookingRejection),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl AppError {
    /// Shorthand for the generic malformed-input rejection
    pub fn invalid_fields() -> Self {
        Self::Validation(messages::INVALID_FIELDS.to_string())
    }

    /// Rejection for failed field validation.
    ///
    /// Any failure without a rule message (a blank or malformed field) yields
    /// the generic message. Otherwise the rule message of the first failing
    /// field in `field_order` wins; unlisted fields follow in name order.
    pub fn from_validation(err: &validator::ValidationErrors, field_order: &[&str]) -> Self {
        tracing::debug!(errors = %err, "Request validation failed");

        let mut fields: Vec<_> = err.field_errors().into_iter().collect();
        let unexplained = fields
            .iter()
            .flat_map(|(_, errors)| errors.iter())
            .any(|e| e.message.is_none());
        if fields.is_empty() || unexplained {
            return Self::invalid_fields();
        }

        let rank = |name: &str| {
            field_order
                .iter()
                .position(|field| *field == name)
                .unwrap_or(field_order.len())
        };
        fields.sort_by(|a, b| (rank(a.0.as_ref()), &a.0).cmp(&(rank(b.0.as_ref()), &b.0)));

        fields
            .into_iter()
            .flat_map(|(_, errors)| errors.iter())
            .find_map(|e| e.message.as_ref())
            .map(|message| Self::Validation(message.to_string()))
            .unwrap_or_else(Self::invalid_fields)
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidToken | Self::TokenExpired | Self::Unauthorized | Self::NotCoach => {
                StatusCode::UNAUTHORIZED
            }
            Self::InvalidCredentials
            | Self::Validation(_)
            | Self::BadRequest(_)
            | Self::NotFound(_)
            | Self::Booking(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors but don't expose details to clients
        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                messages::INTERNAL_ERROR.to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                messages::INTERNAL_ERROR.to_string()
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse {
            status: if status.is_server_error() { "error" } else { "failed" },
            message,
        };

        (status, Json(body)).into_response()
    }
}

// Implement From for common error types
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
            _ => AppError::InvalidToken,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::from_validation(&err, &[])
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(rejection = %rejection.body_text(), "Malformed JSON body");
        AppError::invalid_fields()
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(rejection = %rejection.body_text(), "Malformed query string");
        AppError::invalid_fields()
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_rejections_are_client_errors() {
        let err = AppError::from(BookingRejection::CourseFull);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), BookingRejection::CourseFull.to_string());
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::NotCoach.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::Conflict("dup".to_string()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::NotFound("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Database("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    fn failure(code: &'static str, message: Option<&'static str>) -> validator::ValidationError {
        let mut err = validator::ValidationError::new(code);
        err.message = message.map(Into::into);
        err
    }

    fn message_of(err: AppError) -> String {
        match err {
            AppError::Validation(message) => message,
            other => panic!("expected a validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_message_follows_field_order() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("email", failure("email", Some(messages::EMAIL_FORMAT)));
        errors.add("name", failure("user_name", Some(messages::USER_NAME_RULES)));

        let ordered = AppError::from_validation(&errors, &["name", "email", "password"]);
        assert_eq!(message_of(ordered), messages::USER_NAME_RULES);

        // without an order, fields fall back to name order
        assert_eq!(message_of(AppError::from(errors)), messages::EMAIL_FORMAT);
    }

    #[test]
    fn test_blank_field_outranks_rule_messages() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("name", failure("user_name", Some(messages::USER_NAME_RULES)));
        errors.add("password", failure("blank", None));

        let err = AppError::from_validation(&errors, &["name", "email", "password"]);
        assert_eq!(message_of(err), messages::INVALID_FIELDS);
    }

    #[test]
    fn test_database_errors_hide_details() {
        let response = AppError::Database("relation users does not exist".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
