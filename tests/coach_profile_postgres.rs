//! Coach profile updates against a real Postgres instance
//!
//! Needs a Docker daemon. Run with `cargo test -- --ignored`.

mod common;

use sqlx::PgPool;
use uuid::Uuid;

use coachmarket::{
    constants::messages,
    db::repositories::CoachRepository,
    error::AppError,
    services::{AdminService, CoachProfileFields},
};

use common::{insert_skill, insert_user, start_db};

async fn insert_coach(pool: &PgPool, user_id: Uuid, skill_ids: &[Uuid]) -> Uuid {
    let coach_id: Uuid = sqlx::query_scalar(
        "INSERT INTO coaches (user_id, experience_years, description) VALUES ($1, 5, '原本的介紹') RETURNING id",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
    .expect("Failed to insert coach");

    for skill_id in skill_ids {
        sqlx::query("INSERT INTO coach_link_skills (coach_id, skill_id) VALUES ($1, $2)")
            .bind(coach_id)
            .bind(skill_id)
            .execute(pool)
            .await
            .expect("Failed to link skill");
    }

    coach_id
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_unknown_skill_leaves_profile_untouched() {
    let db = start_db().await;
    let user_id = insert_user(&db.pool, "coach@example.com", "COACH").await;
    let linked = insert_skill(&db.pool).await;
    let other = insert_skill(&db.pool).await;
    let coach_id = insert_coach(&db.pool, user_id, &[linked]).await;

    let profile = CoachProfileFields {
        experience_years: 9,
        description: "新的介紹",
        profile_image_url: None,
    };
    let result =
        AdminService::update_coach_profile(&db.pool, &user_id, &profile, &[other, Uuid::new_v4()])
            .await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, messages::SKILL_NOT_FOUND),
        other => panic!("expected an unknown skill rejection, got {:?}", other),
    }

    let coach = CoachRepository::find_by_user_id(&db.pool, &user_id)
        .await
        .unwrap()
        .expect("coach still exists");
    assert_eq!(coach.experience_years, 5);
    assert_eq!(coach.description, "原本的介紹");
    assert_eq!(
        CoachRepository::skill_ids(&db.pool, &coach_id).await.unwrap(),
        vec![linked]
    );
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_known_skills_replace_links() {
    let db = start_db().await;
    let user_id = insert_user(&db.pool, "coach@example.com", "COACH").await;
    let old = insert_skill(&db.pool).await;
    let new = insert_skill(&db.pool).await;
    insert_coach(&db.pool, user_id, &[old]).await;

    let profile = CoachProfileFields {
        experience_years: 9,
        description: "新的介紹",
        profile_image_url: Some("https://cdn.example.com/me.png"),
    };
    let (coach, skill_ids) =
        AdminService::update_coach_profile(&db.pool, &user_id, &profile, &[new, new])
            .await
            .unwrap();

    assert_eq!(coach.experience_years, 9);
    assert_eq!(coach.profile_image_url.as_deref(), Some("https://cdn.example.com/me.png"));
    assert_eq!(skill_ids, vec![new]);
}
