//! Skill request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{constants::MAX_CATALOG_NAME_LENGTH, utils::validate_not_blank};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSkillRequest {
    #[validate(
        length(max = MAX_CATALOG_NAME_LENGTH),
        custom(function = "validate_not_blank")
    )]
    pub name: String,
}
