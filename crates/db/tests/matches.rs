//! Integration tests for match pair uniqueness and lookups.

use assert_matches::assert_matches;
use sqlx::PgPool;
use tablematch_core::lifecycle::MatchStatus;
use tablematch_core::types::DbId;
use tablematch_db::repositories::{MatchRepo, PhotoMatchRepo};

async fn seed_user(pool: &PgPool, email: &str) -> DbId {
    sqlx::query_scalar("INSERT INTO users (email, display_name) VALUES ($1, $1) RETURNING id")
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn seed_dish(pool: &PgPool) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO dishes (name, image_url, meal_type) \
         VALUES ('Ramen', 'https://img.example/r.jpg', 'dinner') RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap()
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

// ---------------------------------------------------------------------------
// Dish matches
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_pair_is_rejected_in_both_orderings(pool: PgPool) {
    let a = seed_user(&pool, "a@example.com").await;
    let b = seed_user(&pool, "b@example.com").await;
    let dish = seed_dish(&pool).await;

    MatchRepo::create(&pool, a, b, dish).await.unwrap();

    let same = MatchRepo::create(&pool, a, b, dish).await.unwrap_err();
    assert!(is_unique_violation(&same));

    // The unique index canonicalizes the pair, so the reversed ordering
    // collides too.
    let reversed = MatchRepo::create(&pool, b, a, dish).await.unwrap_err();
    assert!(is_unique_violation(&reversed));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn same_pair_can_match_on_a_different_dish(pool: PgPool) {
    let a = seed_user(&pool, "a@example.com").await;
    let b = seed_user(&pool, "b@example.com").await;
    let dish1 = seed_dish(&pool).await;
    let dish2 = seed_dish(&pool).await;

    MatchRepo::create(&pool, a, b, dish1).await.unwrap();
    MatchRepo::create(&pool, b, a, dish2).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_between_checks_both_orderings(pool: PgPool) {
    let a = seed_user(&pool, "a@example.com").await;
    let b = seed_user(&pool, "b@example.com").await;
    let dish = seed_dish(&pool).await;

    let created = MatchRepo::create(&pool, a, b, dish).await.unwrap();
    assert_eq!(created.status, MatchStatus::Matched);

    let forward = MatchRepo::find_between(&pool, a, b, dish).await.unwrap();
    let backward = MatchRepo::find_between(&pool, b, a, dish).await.unwrap();
    assert_eq!(forward.map(|m| m.id), Some(created.id));
    assert_eq!(backward.map(|m| m.id), Some(created.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn self_pairs_are_rejected_by_the_schema(pool: PgPool) {
    let a = seed_user(&pool, "a@example.com").await;
    let dish = seed_dish(&pool).await;

    let err = MatchRepo::create(&pool, a, a, dish).await.unwrap_err();
    // chk_matches_distinct_users, a check violation rather than 23505.
    assert_matches!(err, sqlx::Error::Database(_));
}

// ---------------------------------------------------------------------------
// Photo matches
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn photo_match_pair_is_globally_unique(pool: PgPool) {
    let a = seed_user(&pool, "a@example.com").await;
    let b = seed_user(&pool, "b@example.com").await;

    let created = PhotoMatchRepo::create(&pool, b, a, 2).await.unwrap();
    // Canonical ordering: user1 < user2.
    assert!(created.user1_id < created.user2_id);

    let dup = PhotoMatchRepo::create(&pool, a, b, 3).await.unwrap_err();
    assert!(is_unique_violation(&dup));
}
