//! Credit package response DTOs

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::CreditPackage;

#[derive(Debug, Serialize)]
pub struct PackageResponse {
    pub id: Uuid,
    pub name: String,
    pub credit_amount: i32,
    pub price: Decimal,
}

impl From<CreditPackage> for PackageResponse {
    fn from(package: CreditPackage) -> Self {
        Self {
            id: package.id,
            name: package.name,
            credit_amount: package.credit_amount,
            price: package.price,
        }
    }
}
