//! Booking against a real Postgres instance
//!
//! Needs a Docker daemon. Run with `cargo test -- --ignored`.

mod common;

use std::sync::Arc;

use futures::future::join_all;
use uuid::Uuid;

use coachmarket::{
    booking::{BookingRejection, BookingService},
    db::repositories::{BookingRepository, PgBookingStore},
    error::AppError,
};

use common::{give_credits, insert_course, insert_user, start_db};

fn rejection(result: &Result<(), AppError>) -> Option<BookingRejection> {
    match result {
        Err(AppError::Booking(rejection)) => Some(*rejection),
        _ => None,
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires docker"]
async fn test_last_seat_goes_to_exactly_one_user() {
    let db = start_db().await;
    let coach_id = insert_user(&db.pool, "coach@example.com", "COACH").await;
    let course_id = insert_course(&db.pool, coach_id, 1).await;

    let mut users = Vec::new();
    for i in 0..8 {
        let user_id = insert_user(&db.pool, &format!("user{i}@example.com"), "USER").await;
        give_credits(&db.pool, user_id, 2).await;
        users.push(user_id);
    }

    let service = Arc::new(BookingService::new(Arc::new(PgBookingStore::new(
        db.pool.clone(),
    ))));

    let attempts = users.iter().map(|&user_id| {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.create_booking(user_id, course_id).await })
    });
    let results: Vec<_> = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.expect("booking task panicked"))
        .collect();

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter(|r| r.is_err())
        .all(|r| rejection(r) == Some(BookingRejection::CourseFull)));

    let stats = BookingRepository::stats_for_courses(&db.pool, &[course_id])
        .await
        .unwrap();
    assert_eq!(stats.active_bookings, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires docker"]
async fn test_same_user_double_submit_books_once() {
    let db = start_db().await;
    let coach_id = insert_user(&db.pool, "coach@example.com", "COACH").await;
    let course_id = insert_course(&db.pool, coach_id, 10).await;
    let user_id = insert_user(&db.pool, "user@example.com", "USER").await;
    give_credits(&db.pool, user_id, 5).await;

    let service = Arc::new(BookingService::new(Arc::new(PgBookingStore::new(
        db.pool.clone(),
    ))));

    let attempts = (0..4).map(|_| {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.create_booking(user_id, course_id).await })
    });
    let results: Vec<_> = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.expect("booking task panicked"))
        .collect();

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter(|r| r.is_err())
        .all(|r| rejection(r) == Some(BookingRejection::AlreadyBooked)));
    assert_eq!(service.remaining_credits(user_id).await.unwrap(), 4);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires docker"]
async fn test_cancel_refunds_and_frees_the_seat() {
    let db = start_db().await;
    let coach_id = insert_user(&db.pool, "coach@example.com", "COACH").await;
    let course_id = insert_course(&db.pool, coach_id, 1).await;
    let first = insert_user(&db.pool, "first@example.com", "USER").await;
    let second = insert_user(&db.pool, "second@example.com", "USER").await;
    give_credits(&db.pool, first, 1).await;
    give_credits(&db.pool, second, 1).await;

    let service = BookingService::new(Arc::new(PgBookingStore::new(db.pool.clone())));

    service.create_booking(first, course_id).await.unwrap();
    assert_eq!(service.remaining_credits(first).await.unwrap(), 0);
    assert_eq!(
        rejection(&service.create_booking(second, course_id).await),
        Some(BookingRejection::CourseFull)
    );

    service.cancel_booking(first, course_id).await.unwrap();
    assert_eq!(service.remaining_credits(first).await.unwrap(), 1);
    assert_eq!(
        rejection(&service.cancel_booking(first, course_id).await),
        Some(BookingRejection::NotBooked)
    );

    service.create_booking(second, course_id).await.unwrap();
    // cancelled rows stay, so the first user can book again once a seat opens
    service.cancel_booking(second, course_id).await.unwrap();
    service.create_booking(first, course_id).await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires docker"]
async fn test_booking_without_credit_is_refused() {
    let db = start_db().await;
    let coach_id = insert_user(&db.pool, "coach@example.com", "COACH").await;
    let course_id = insert_course(&db.pool, coach_id, 3).await;
    let user_id = insert_user(&db.pool, "broke@example.com", "USER").await;

    let service = BookingService::new(Arc::new(PgBookingStore::new(db.pool.clone())));

    assert_eq!(
        rejection(&service.create_booking(user_id, course_id).await),
        Some(BookingRejection::NoCreditsRemaining)
    );
    assert_eq!(
        rejection(&service.create_booking(user_id, Uuid::new_v4()).await),
        Some(BookingRejection::CourseNotFound)
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires docker"]
async fn test_single_credit_cannot_book_two_courses_at_once() {
    let db = start_db().await;
    let coach_id = insert_user(&db.pool, "coach@example.com", "COACH").await;
    let first = insert_course(&db.pool, coach_id, 5).await;
    let second = insert_course(&db.pool, coach_id, 5).await;
    let user_id = insert_user(&db.pool, "user@example.com", "USER").await;
    give_credits(&db.pool, user_id, 1).await;

    let service = Arc::new(BookingService::new(Arc::new(PgBookingStore::new(
        db.pool.clone(),
    ))));

    for _ in 0..5 {
        let attempts = [first, second].map(|course_id| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.create_booking(user_id, course_id).await })
        });
        let results: Vec<_> = join_all(attempts)
            .await
            .into_iter()
            .map(|joined| joined.expect("booking task panicked"))
            .collect();

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .filter(|r| r.is_err())
            .all(|r| rejection(r) == Some(BookingRejection::NoCreditsRemaining)));
        assert_eq!(service.remaining_credits(user_id).await.unwrap(), 0);

        // release the credit for the next round
        for course_id in [first, second] {
            let _ = service.cancel_booking(user_id, course_id).await;
        }
        assert_eq!(service.remaining_credits(user_id).await.unwrap(), 1);
    }
}
