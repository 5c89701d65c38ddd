//! Utility functions

pub mod time;
pub mod validation;

pub use time::{month_bounds, month_bounds_in_year_of, month_from_name};
pub use validation::{
    parse_uuid, validate_email, validate_not_blank, validate_password, validate_price,
    validate_url, validate_user_name,
};
