//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod booking_repo;
pub mod coach_repo;
pub mod course_repo;
pub mod credit_repo;
pub mod skill_repo;
pub mod user_repo;

pub use booking_repo::{BookingRepository, BookingStats, PgBookingStore};
pub use coach_repo::{CoachName, CoachRepository};
pub use course_repo::{CourseFields, CourseRepository};
pub use credit_repo::{CreditRepository, PurchaseTotals};
pub use skill_repo::SkillRepository;
pub use user_repo::UserRepository;
