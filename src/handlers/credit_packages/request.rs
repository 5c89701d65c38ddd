//! Credit package request DTOs

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::MAX_CATALOG_NAME_LENGTH,
    utils::{validate_not_blank, validate_price},
};

/// New credit package
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePackageRequest {
    #[validate(
        length(max = MAX_CATALOG_NAME_LENGTH),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[validate(range(min = 0))]
    pub credit_amount: i32,

    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_package_request_validation() {
        let request: CreatePackageRequest = serde_json::from_value(serde_json::json!({
            "name": "14 堂組合包方案",
            "credit_amount": 14,
            "price": 2520
        }))
        .unwrap();
        assert!(request.validate().is_ok());

        let request: CreatePackageRequest = serde_json::from_value(serde_json::json!({
            "name": " ",
            "credit_amount": -1,
            "price": 10.5
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }
}
