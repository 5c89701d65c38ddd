//! Credit package and purchase repository

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{CreditPackage, CreditPurchase, PurchaseWithPackage},
};

/// Platform-wide purchase totals
#[derive(Debug, sqlx::FromRow)]
pub struct PurchaseTotals {
    pub total_price: Decimal,
    pub total_credits: i64,
}

/// Repository for credit database operations
pub struct CreditRepository;

impl CreditRepository {
    pub async fn list_packages(pool: &PgPool) -> AppResult<Vec<CreditPackage>> {
        let packages = sqlx::query_as::<_, CreditPackage>(
            r#"SELECT * FROM credit_packages ORDER BY created_at"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(packages)
    }

    pub async fn find_package_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<CreditPackage>> {
        let package = sqlx::query_as::<_, CreditPackage>(
            r#"SELECT * FROM credit_packages WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(package)
    }

    pub async fn find_package_by_name(pool: &PgPool, name: &str) -> AppResult<Option<CreditPackage>> {
        let package = sqlx::query_as::<_, CreditPackage>(
            r#"SELECT * FROM credit_packages WHERE name = $1"#,
        )
        .bind(name)
        .fetch_optional(pool)
        .await?;

        Ok(package)
    }

    pub async fn create_package(
        pool: &PgPool,
        name: &str,
        credit_amount: i32,
        price: Decimal,
    ) -> AppResult<CreditPackage> {
        let package = sqlx::query_as::<_, CreditPackage>(
            r#"
            INSERT INTO credit_packages (name, credit_amount, price)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(credit_amount)
        .bind(price)
        .fetch_one(pool)
        .await?;

        Ok(package)
    }

    /// Delete a package. Returns `false` if no row matched.
    pub async fn delete_package(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM credit_packages WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Record a purchase of `package` by `user_id`
    pub async fn create_purchase(
        pool: &PgPool,
        user_id: &Uuid,
        package: &CreditPackage,
        purchase_at: DateTime<Utc>,
    ) -> AppResult<CreditPurchase> {
        let purchase = sqlx::query_as::<_, CreditPurchase>(
            r#"
            INSERT INTO credit_purchases (
                user_id, credit_package_id, purchased_credits, price_paid, purchase_at
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(package.id)
        .bind(package.credit_amount)
        .bind(package.price)
        .bind(purchase_at)
        .fetch_one(pool)
        .await?;

        Ok(purchase)
    }

    /// A user's purchase history with package names
    pub async fn purchases_by_user(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<PurchaseWithPackage>> {
        let purchases = sqlx::query_as::<_, PurchaseWithPackage>(
            r#"
            SELECT
                cp.purchased_credits,
                cp.price_paid,
                pkg.name,
                cp.purchase_at
            FROM credit_purchases cp
            JOIN credit_packages pkg ON cp.credit_package_id = pkg.id
            WHERE cp.user_id = $1
            ORDER BY cp.purchase_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(purchases)
    }

    /// Totals over every purchase on the platform
    pub async fn totals(pool: &PgPool) -> AppResult<PurchaseTotals> {
        let totals = sqlx::query_as::<_, PurchaseTotals>(
            r#"
            SELECT
                COALESCE(SUM(price_paid), 0) AS total_price,
                COALESCE(SUM(purchased_credits), 0)::BIGINT AS total_credits
            FROM credit_purchases
            "#,
        )
        .fetch_one(pool)
        .await?;

        Ok(totals)
    }
}
