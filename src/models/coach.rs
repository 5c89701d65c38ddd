//! Coach model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Coach profile, one-to-one with a `COACH` user
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Coach {
    pub id: Uuid,
    pub user_id: Uuid,
    pub experience_years: i32,
    pub description: String,
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Coach joined with the owning user's public fields
#[derive(Debug, Clone, FromRow)]
pub struct CoachWithUser {
    pub id: Uuid,
    pub user_id: Uuid,
    pub experience_years: i32,
    pub description: String,
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_name: String,
    pub user_role: String,
}
