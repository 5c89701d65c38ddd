//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod coach;
pub mod course;
pub mod course_booking;
pub mod credit;
pub mod skill;
pub mod user;

pub use coach::*;
pub use course::*;
pub use course_booking::*;
pub use credit::*;
pub use skill::*;
pub use user::*;
