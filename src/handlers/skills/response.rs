//! Skill response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::models::Skill;

#[derive(Debug, Serialize)]
pub struct SkillResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<Skill> for SkillResponse {
    fn from(skill: Skill) -> Self {
        Self {
            id: skill.id,
            name: skill.name,
        }
    }
}
