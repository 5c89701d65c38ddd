//! Authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;

use crate::{
    config::JwtConfig,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user with the default role
    pub async fn signup(pool: &PgPool, name: &str, email: &str, password: &str) -> AppResult<User> {
        if UserRepository::find_by_email(pool, email).await?.is_some() {
            return Err(AppError::Conflict("Email 已被使用".to_string()));
        }

        let password_hash = Self::hash_password(password)?;
        let user = UserRepository::create(pool, name, email, &password_hash).await?;

        info!(user_id = %user.id, "User signed up");
        Ok(user)
    }

    /// Login with email and password, returning the user and a bearer token
    pub async fn login(
        pool: &PgPool,
        config: &JwtConfig,
        email: &str,
        password: &str,
    ) -> AppResult<(User, String)> {
        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        let token = Self::generate_token(&user, config)?;
        Ok((user, token))
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Sign a token for `user`
    pub fn generate_token(user: &User, config: &JwtConfig) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            role: user.role.clone(),
            exp: (now + Duration::hours(config.expiry_hours)).timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))
    }

    /// Hash password using Argon2
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            expiry_hours: 1,
        }
    }

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: String::new(),
            role: "USER".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_password_hash_roundtrip() {
        let hash = AuthService::hash_password("Password1").unwrap();
        assert_ne!(hash, "Password1");
        assert!(AuthService::verify_password("Password1", &hash).unwrap());
        assert!(!AuthService::verify_password("Password2", &hash).unwrap());
    }

    #[test]
    fn test_token_carries_user_and_role() {
        let user = user();
        let token = AuthService::generate_token(&user, &jwt_config()).unwrap();

        let claims = tokio_test::assert_ok!(AuthService::verify_token(&token, "test-secret"));
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.role, "USER");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_with_wrong_secret_is_invalid() {
        let token = AuthService::generate_token(&user(), &jwt_config()).unwrap();

        let err = tokio_test::assert_err!(AuthService::verify_token(&token, "other-secret"));
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn test_expired_token_is_reported_as_expired() {
        let config = JwtConfig {
            expiry_hours: -2,
            ..jwt_config()
        };
        let token = AuthService::generate_token(&user(), &config).unwrap();

        let result = AuthService::verify_token(&token, "test-secret");
        assert!(matches!(result, Err(AppError::TokenExpired)));
    }
}
