//! Skill catalog service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::messages,
    db::repositories::SkillRepository,
    error::{AppError, AppResult},
    models::Skill,
};

pub struct SkillService;

impl SkillService {
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Skill>> {
        SkillRepository::list(pool).await
    }

    pub async fn create(pool: &PgPool, name: &str) -> AppResult<Skill> {
        if SkillRepository::find_by_name(pool, name).await?.is_some() {
            return Err(AppError::Conflict(messages::DUPLICATE_DATA.to_string()));
        }

        SkillRepository::create(pool, name).await
    }

    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if SkillRepository::delete(pool, id).await? {
            Ok(())
        } else {
            Err(AppError::BadRequest("id 不存在".to_string()))
        }
    }
}
