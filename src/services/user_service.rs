//! User service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    booking::{BookingService, CreditLedger},
    constants::messages,
    db::repositories::{CourseRepository, CreditRepository, UserRepository},
    error::{AppError, AppResult},
    models::{BookedCourse, PurchaseWithPackage, User},
    services::AuthService,
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Get user by ID
    pub async fn get_user_by_id(pool: &PgPool, id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(messages::USER_NOT_FOUND.to_string()))
    }

    /// Change the display name
    pub async fn update_name(pool: &PgPool, id: &Uuid, name: &str) -> AppResult<User> {
        let user = Self::get_user_by_id(pool, id).await?;
        if user.name == name {
            return Err(AppError::BadRequest("使用者名稱未變更".to_string()));
        }

        UserRepository::update_name(pool, id, name).await
    }

    /// Replace the password after checking the current one
    pub async fn change_password(
        pool: &PgPool,
        id: &Uuid,
        current_password: &str,
        new_password: &str,
        confirm_new_password: &str,
    ) -> AppResult<()> {
        if new_password != confirm_new_password {
            return Err(AppError::BadRequest("新密碼與驗證新密碼不一致".to_string()));
        }

        let user = Self::get_user_by_id(pool, id).await?;
        if !AuthService::verify_password(current_password, &user.password_hash)? {
            return Err(AppError::BadRequest("密碼輸入錯誤".to_string()));
        }

        if current_password == new_password {
            return Err(AppError::BadRequest("新密碼不能與舊密碼相同".to_string()));
        }

        let password_hash = AuthService::hash_password(new_password)?;
        if !UserRepository::update_password(pool, id, &password_hash).await? {
            return Err(AppError::BadRequest("更新密碼失敗".to_string()));
        }

        Ok(())
    }

    /// The user's credit purchase history
    pub async fn purchases(pool: &PgPool, id: &Uuid) -> AppResult<Vec<PurchaseWithPackage>> {
        CreditRepository::purchases_by_user(pool, id).await
    }

    /// Active bookings together with the user's credit position
    pub async fn booked_courses(
        pool: &PgPool,
        bookings: &BookingService,
        id: &Uuid,
    ) -> AppResult<(CreditLedger, Vec<BookedCourse>)> {
        let ledger = bookings.ledger(*id).await?;
        let courses = CourseRepository::list_booked_by(pool, id).await?;

        Ok((ledger, courses))
    }
}
