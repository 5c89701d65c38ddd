//! Credit package service

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    constants::messages,
    db::repositories::CreditRepository,
    error::{AppError, AppResult},
    models::{CreditPackage, CreditPurchase},
};

/// Rejection for an unknown or malformed package id
pub const INVALID_PACKAGE_ID: &str = "ID錯誤";

/// Credit package service
pub struct CreditPackageService;

impl CreditPackageService {
    pub async fn list(pool: &PgPool) -> AppResult<Vec<CreditPackage>> {
        CreditRepository::list_packages(pool).await
    }

    /// Create a package with a unique name
    pub async fn create(
        pool: &PgPool,
        name: &str,
        credit_amount: i32,
        price: Decimal,
    ) -> AppResult<CreditPackage> {
        if CreditRepository::find_package_by_name(pool, name).await?.is_some() {
            return Err(AppError::Conflict(messages::DUPLICATE_DATA.to_string()));
        }

        CreditRepository::create_package(pool, name, credit_amount, price).await
    }

    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if CreditRepository::delete_package(pool, id).await? {
            Ok(())
        } else {
            Err(AppError::BadRequest(INVALID_PACKAGE_ID.to_string()))
        }
    }

    /// Buy a package. The purchase snapshots its credits and price.
    pub async fn purchase(pool: &PgPool, user_id: &Uuid, package_id: &Uuid) -> AppResult<CreditPurchase> {
        let package = CreditRepository::find_package_by_id(pool, package_id)
            .await?
            .ok_or_else(|| AppError::BadRequest(INVALID_PACKAGE_ID.to_string()))?;

        let purchase = CreditRepository::create_purchase(pool, user_id, &package, Utc::now()).await?;

        info!(
            %user_id,
            package_id = %package.id,
            credits = purchase.purchased_credits,
            "Credit package purchased"
        );
        Ok(purchase)
    }
}
