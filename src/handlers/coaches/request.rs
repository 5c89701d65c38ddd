//! Coach directory request DTOs

use serde::Deserialize;
use validator::Validate;

/// Pagination for the coach list; both parameters are required
#[derive(Debug, Deserialize, Validate)]
pub struct ListCoachesQuery {
    #[validate(range(min = 1))]
    pub per: u32,

    #[validate(range(min = 1))]
    pub page: u32,
}
