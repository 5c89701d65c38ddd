//! Credit package and purchase models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Credit package catalog entry
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CreditPackage {
    pub id: Uuid,
    pub name: String,
    pub credit_amount: i32,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

/// A single credit purchase. Rows are never updated once written.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CreditPurchase {
    pub id: Uuid,
    pub user_id: Uuid,
    pub credit_package_id: Uuid,
    pub purchased_credits: i32,
    pub price_paid: Decimal,
    pub purchase_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Purchase joined with its package name
#[derive(Debug, Clone, FromRow)]
pub struct PurchaseWithPackage {
    pub purchased_credits: i32,
    pub price_paid: Decimal,
    pub name: String,
    pub purchase_at: DateTime<Utc>,
}
