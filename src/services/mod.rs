//! Business logic services

pub mod admin_service;
pub mod auth_service;
pub mod coach_service;
pub mod course_service;
pub mod credit_package_service;
pub mod skill_service;
pub mod user_service;

pub use admin_service::{AdminService, CoachProfileFields, RevenueSummary};
pub use auth_service::{AuthService, Claims};
pub use coach_service::CoachService;
pub use course_service::CourseService;
pub use credit_package_service::CreditPackageService;
pub use skill_service::SkillService;
pub use user_service::UserService;
