//! User response DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    booking::{CourseStatus, CreditLedger},
    models::{BookedCourse, PurchaseWithPackage, User},
};

#[derive(Debug, Serialize)]
pub struct CreatedUser {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub user: CreatedUser,
}

#[derive(Debug, Serialize)]
pub struct UserName {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserName,
}

#[derive(Debug, Serialize)]
pub struct ProfileUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: ProfileUser,
}

#[derive(Debug, Serialize)]
pub struct UpdateProfileResponse {
    pub user: UserName,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            user: ProfileUser {
                name: user.name,
                email: user.email,
            },
        }
    }
}

/// One row of the purchase history
#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub purchased_credits: i32,
    pub price_paid: Decimal,
    pub name: String,
    pub purchase_at: DateTime<Utc>,
}

impl From<PurchaseWithPackage> for PurchaseResponse {
    fn from(p: PurchaseWithPackage) -> Self {
        Self {
            purchased_credits: p.purchased_credits,
            price_paid: p.price_paid,
            name: p.name,
            purchase_at: p.purchase_at,
        }
    }
}

/// An active booking with its booker-view status
#[derive(Debug, Serialize)]
pub struct BookedCourseResponse {
    pub name: String,
    pub course_id: Uuid,
    pub coach_name: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub meeting_url: Option<String>,
    pub status: &'static str,
}

impl BookedCourseResponse {
    pub fn at(course: BookedCourse, now: DateTime<Utc>) -> Self {
        let status = CourseStatus::derive(now, course.start_at, course.end_at);
        Self {
            name: course.name,
            course_id: course.course_id,
            coach_name: course.coach_name,
            start_at: course.start_at,
            end_at: course.end_at,
            meeting_url: course.meeting_url,
            status: status.booker_label(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookedCoursesResponse {
    pub credit_remain: i64,
    pub credit_usage: i64,
    pub course_booking: Vec<BookedCourseResponse>,
}

impl BookedCoursesResponse {
    pub fn new(ledger: CreditLedger, courses: Vec<BookedCourse>, now: DateTime<Utc>) -> Self {
        Self {
            credit_remain: ledger.remaining(),
            credit_usage: ledger.active_bookings,
            course_booking: courses
                .into_iter()
                .map(|course| BookedCourseResponse::at(course, now))
                .collect(),
        }
    }
}
