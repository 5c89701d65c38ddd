//! Postgres container and seed helpers shared by the integration tests

#![allow(dead_code)]

use chrono::{Duration, Utc};
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use uuid::Uuid;

pub struct TestDb {
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

pub async fn start_db() -> TestDb {
    let container = Postgres::default()
        .with_user("coach")
        .with_password("coach")
        .with_db_name("coachmarket_test")
        .with_tag("16-alpine")
        .start()
        .await
        .expect("Failed to start postgres container");

    let host = container.get_host().await.expect("Failed to get host");
    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get port");
    let url = format!("postgres://coach:coach@{host}:{port}/coachmarket_test");

    let pool = PgPool::connect(&url).await.expect("Failed to connect");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    TestDb {
        pool,
        _container: container,
    }
}

pub async fn insert_user(pool: &PgPool, email: &str, role: &str) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO users (name, email, role, password_hash) VALUES ('測試', $1, $2, 'x') RETURNING id",
    )
    .bind(email)
    .bind(role)
    .fetch_one(pool)
    .await
    .expect("Failed to insert user")
}

pub async fn give_credits(pool: &PgPool, user_id: Uuid, credits: i32) {
    let package_id: Uuid = sqlx::query_scalar(
        "INSERT INTO credit_packages (name, credit_amount, price) VALUES ($1, $2, 1400) RETURNING id",
    )
    .bind(format!("package-{user_id}"))
    .bind(credits)
    .fetch_one(pool)
    .await
    .expect("Failed to insert package");

    sqlx::query(
        "INSERT INTO credit_purchases (user_id, credit_package_id, purchased_credits, price_paid, purchase_at)
         VALUES ($1, $2, $3, 1400, NOW())",
    )
    .bind(user_id)
    .bind(package_id)
    .bind(credits)
    .execute(pool)
    .await
    .expect("Failed to insert purchase");
}

pub async fn insert_skill(pool: &PgPool) -> Uuid {
    sqlx::query_scalar("INSERT INTO skills (name) VALUES ($1) RETURNING id")
        .bind(format!("skill-{}", Uuid::new_v4()))
        .fetch_one(pool)
        .await
        .expect("Failed to insert skill")
}

pub async fn insert_course(pool: &PgPool, coach_id: Uuid, max_participants: i32) -> Uuid {
    let skill_id = insert_skill(pool).await;

    let start_at = Utc::now() + Duration::days(7);
    sqlx::query_scalar(
        "INSERT INTO courses (user_id, skill_id, name, description, start_at, end_at, max_participants)
         VALUES ($1, $2, '重訓入門', '基礎動作', $3, $4, $5) RETURNING id",
    )
    .bind(coach_id)
    .bind(skill_id)
    .bind(start_at)
    .bind(start_at + Duration::hours(1))
    .bind(max_participants)
    .fetch_one(pool)
    .await
    .expect("Failed to insert course")
}
