//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Seconds to wait for a pooled connection before failing the request
pub const DATABASE_ACQUIRE_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: usize = 16;

// =============================================================================
// FIELD LIMITS
// =============================================================================

/// Maximum length of a skill or credit package name
pub const MAX_CATALOG_NAME_LENGTH: u64 = 50;

/// Maximum length of a course name
pub const MAX_COURSE_NAME_LENGTH: u64 = 100;

// =============================================================================
// USER ROLES
// =============================================================================

/// User roles
pub mod roles {
    pub const USER: &str = "USER";
    pub const COACH: &str = "COACH";
}

// =============================================================================
// RESPONSE MESSAGES
// =============================================================================

/// User-facing messages shared across handlers
pub mod messages {
    pub const INVALID_FIELDS: &str = "欄位未填寫正確";
    pub const LOGIN_REQUIRED: &str = "請先登入";
    pub const INVALID_TOKEN: &str = "無效的 token";
    pub const TOKEN_EXPIRED: &str = "token 已過期";
    pub const NOT_A_COACH: &str = "使用者尚未成為教練";
    pub const ALREADY_A_COACH: &str = "使用者已經是教練";
    pub const USER_NOT_FOUND: &str = "使用者不存在";
    pub const COACH_NOT_FOUND: &str = "找不到該教練";
    pub const COURSE_NOT_FOUND: &str = "課程不存在";
    pub const SKILL_NOT_FOUND: &str = "專長不存在";
    pub const DUPLICATE_DATA: &str = "資料重複";
    pub const INTERNAL_ERROR: &str = "伺服器錯誤";

    pub const EMAIL_FORMAT: &str = "Email 格式不正確";

    pub const PASSWORD_RULES: &str =
        "密碼不符合規則，需要包含英文數字大小寫，最短 8 個字，最長 16 個字";
    pub const USER_NAME_RULES: &str =
        "使用者名稱不符合規則，最少 2 個字，最多 10 個字，不可包含任何特殊符號與空白";
}
