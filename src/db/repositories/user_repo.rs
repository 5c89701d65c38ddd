//! User repository

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::{constants::roles, error::AppResult, models::User};

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user with the default role
    pub async fn create(
        pool: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(roles::USER)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Update display name
    pub async fn update_name(pool: &PgPool, id: &Uuid, name: &str) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Replace the password hash. Returns `false` if no row matched.
    pub async fn update_password(pool: &PgPool, id: &Uuid, password_hash: &str) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(password_hash)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Lock a user row for the rest of the transaction
    pub async fn find_for_update(conn: &mut PgConnection, id: &Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1 FOR UPDATE"#)
            .bind(id)
            .fetch_optional(conn)
            .await?;

        Ok(user)
    }

    /// Update user role
    pub async fn update_role(conn: &mut PgConnection, id: &Uuid, role: &str) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET role = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(role)
        .fetch_one(conn)
        .await?;

        Ok(user)
    }
}
