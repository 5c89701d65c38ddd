//! User request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    handlers::common::ValidateInOrder,
    utils::{validate_email, validate_not_blank, validate_password, validate_user_name},
};

/// Signup request
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(custom(function = "validate_user_name"))]
    pub name: String,

    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

/// Display name change
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(custom(function = "validate_user_name"))]
    pub name: String,
}

/// Password change
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub password: String,

    #[validate(custom(function = "validate_password"))]
    pub new_password: String,

    #[validate(custom(function = "validate_password"))]
    pub confirm_new_password: String,
}

impl ValidateInOrder for SignupRequest {
    const FIELD_ORDER: &'static [&'static str] = &["name", "email", "password"];
}

impl ValidateInOrder for LoginRequest {
    const FIELD_ORDER: &'static [&'static str] = &["email", "password"];
}

impl ValidateInOrder for UpdateProfileRequest {
    const FIELD_ORDER: &'static [&'static str] = &["name"];
}

impl ValidateInOrder for UpdatePasswordRequest {
    const FIELD_ORDER: &'static [&'static str] = &["password", "new_password", "confirm_new_password"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::messages,
        error::{AppError, AppResult},
    };

    #[test]
    fn test_signup_request_validation() {
        let valid = SignupRequest {
            name: "王小明".to_string(),
            email: "ming@example.com".to_string(),
            password: "Password1".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = SignupRequest {
            email: "not-an-email".to_string(),
            ..valid
        };
        assert!(bad_email.validate().is_err());
    }

    fn rejection_message(result: AppResult<()>) -> String {
        match result {
            Err(AppError::Validation(message)) => message,
            other => panic!("expected a validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_signup_reports_name_before_email() {
        let request = SignupRequest {
            name: "A".to_string(),
            email: "bad".to_string(),
            password: "Password1".to_string(),
        };
        assert_eq!(
            rejection_message(request.validate_in_order()),
            messages::USER_NAME_RULES
        );
    }

    #[test]
    fn test_signup_blank_field_is_generic() {
        let request = SignupRequest {
            name: "   ".to_string(),
            email: "bad".to_string(),
            password: "Password1".to_string(),
        };
        assert_eq!(
            rejection_message(request.validate_in_order()),
            messages::INVALID_FIELDS
        );
    }

    #[test]
    fn test_password_change_message_order() {
        let request = UpdatePasswordRequest {
            password: "Password1".to_string(),
            new_password: "weak".to_string(),
            confirm_new_password: "Password2".to_string(),
        };
        assert_eq!(
            rejection_message(request.validate_in_order()),
            messages::PASSWORD_RULES
        );

        let request = UpdatePasswordRequest {
            password: "".to_string(),
            ..request
        };
        assert_eq!(
            rejection_message(request.validate_in_order()),
            messages::INVALID_FIELDS
        );
    }

    #[test]
    fn test_password_change_requires_strong_new_password() {
        let request = UpdatePasswordRequest {
            password: "Password1".to_string(),
            new_password: "weak".to_string(),
            confirm_new_password: "weak".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
