//! Input validation utilities
//!
//! Field-level rules shared by the request DTOs. The `validate_*` functions
//! plug into `#[validate(custom(function = "..."))]`.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::ValidationError;

use crate::{
    constants::{messages, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH},
    error::AppError,
};

/// 2 to 10 Han or Latin letters
static USER_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{Han}a-zA-Z]{2,10}$").expect("user name pattern is valid")
});

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

/// http(s) URL with a dotted host, optional port and path
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)+(:\d+)?(/\S*)?$")
        .expect("url pattern is valid")
});

/// Symbols allowed in a password besides ASCII letters and digits
const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

fn invalid(code: &'static str) -> ValidationError {
    ValidationError::new(code)
}

fn invalid_with(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Blank input carries no message, so it surfaces as the generic
/// malformed-fields rejection ahead of any rule message.
fn blank() -> ValidationError {
    invalid("blank")
}

/// Validate display name format
pub fn validate_user_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(blank())
    } else if USER_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(invalid_with("user_name", messages::USER_NAME_RULES))
    }
}

/// Validate password strength: 8-16 characters with lower, upper and digit
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        return Err(blank());
    }

    let len = password.chars().count();
    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c));
    let strong = password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit());

    if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&len) && allowed && strong {
        Ok(())
    } else {
        Err(invalid_with("password", messages::PASSWORD_RULES))
    }
}

/// Validate email address format
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        Err(blank())
    } else if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(invalid_with("email", messages::EMAIL_FORMAT))
    }
}

/// Accept only http(s) URLs
pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    if URL_REGEX.is_match(url) {
        Ok(())
    } else {
        Err(invalid("url"))
    }
}

/// Reject strings that are empty after trimming
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(blank())
    } else {
        Ok(())
    }
}

/// Non-negative amount with at most two decimal places
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() || price.normalize().scale() > 2 {
        Err(invalid("price"))
    } else {
        Ok(())
    }
}

/// Parse a path segment as a UUID, rejecting with `message` otherwise
pub fn parse_uuid(raw: &str, message: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(message.to_string()))
}
