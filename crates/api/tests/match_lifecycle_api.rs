//! Integration tests for the match lifecycle endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    expect_status, get_as, post_as, post_empty_as, seed_dish, seed_user_with_profile,
};
use serde_json::json;
use sqlx::PgPool;
use tablematch_core::types::DbId;

/// Insert a match in `matched` status directly, bypassing the arbiter.
async fn seed_match(pool: &PgPool, user1: DbId, user2: DbId, dish: DbId) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO matches (user1_id, user2_id, dish_id, status) \
         VALUES ($1, $2, $3, 'matched') RETURNING id",
    )
    .bind(user1)
    .bind(user2)
    .bind(dish)
    .fetch_one(pool)
    .await
    .expect("seed match")
}

async fn setup(pool: &PgPool) -> (DbId, DbId, DbId) {
    let alice = seed_user_with_profile(pool, "alice@example.com", "Lisbon").await;
    let bob = seed_user_with_profile(pool, "bob@example.com", "Lisbon").await;
    let dish = seed_dish(pool, "Ramen").await;
    let match_id = seed_match(pool, alice, bob, dish).await;
    (alice, bob, match_id)
}

// ---------------------------------------------------------------------------
// Reading matches
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn both_participants_can_read_the_match(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (alice, bob, match_id) = setup(&pool).await;

    for user in [alice, bob] {
        let response = get_as(app.clone(), user, &format!("/api/v1/matches/{match_id}")).await;
        let json = expect_status(response, StatusCode::OK).await;
        assert_eq!(json["data"]["id"], match_id);
        assert_eq!(json["data"]["status"], "matched");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_participants_see_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_, _, match_id) = setup(&pool).await;
    let mallory = seed_user_with_profile(&pool, "mallory@example.com", "Porto").await;

    let response = get_as(app.clone(), mallory, &format!("/api/v1/matches/{match_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_empty_as(
        app,
        mallory,
        &format!("/api/v1/matches/{match_id}/cancel"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_by_status(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (alice, bob, match_id) = setup(&pool).await;
    let dish2 = seed_dish(&pool, "Pho").await;
    let cancelled_id = seed_match(&pool, alice, bob, dish2).await;

    post_empty_as(
        app.clone(),
        alice,
        &format!("/api/v1/matches/{cancelled_id}/cancel"),
    )
    .await;

    let response = get_as(app.clone(), alice, "/api/v1/matches?status=matched").await;
    let json = expect_status(response, StatusCode::OK).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], match_id);

    let response = get_as(app, alice, "/api/v1/matches").await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Confirm meetup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn confirm_meetup_persists_details(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (alice, _, match_id) = setup(&pool).await;

    let response = post_as(
        app,
        alice,
        &format!("/api/v1/matches/{match_id}/confirm-meetup"),
        json!({
            "meeting_location": "Mercado da Ribeira",
            "meeting_time": "2026-09-01T19:30:00Z"
        }),
    )
    .await;
    let json = expect_status(response, StatusCode::OK).await;

    assert_eq!(json["data"]["status"], "meetup_confirmed");
    assert_eq!(json["data"]["meeting_location"], "Mercado da Ribeira");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn confirm_meetup_replay_is_a_noop(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (alice, bob, match_id) = setup(&pool).await;
    let uri = format!("/api/v1/matches/{match_id}/confirm-meetup");

    post_as(
        app.clone(),
        alice,
        &uri,
        json!({ "meeting_location": "Mercado da Ribeira" }),
    )
    .await;

    // Bob confirming again succeeds and does not clobber the details.
    let response = post_empty_as(app, bob, &uri).await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["status"], "meetup_confirmed");
    assert_eq!(json["data"]["meeting_location"], "Mercado da Ribeira");
}

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn feedback_completes_the_match(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (alice, _, match_id) = setup(&pool).await;

    let response = post_as(
        app.clone(),
        alice,
        &format!("/api/v1/matches/{match_id}/feedback"),
        json!({ "rating": 5, "feedback_text": "Great company", "would_meet_again": true }),
    )
    .await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["rating"], 5);

    let response = get_as(app, alice, &format!("/api/v1/matches/{match_id}")).await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["status"], "completed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn feedback_resubmission_overwrites(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (alice, _, match_id) = setup(&pool).await;
    let uri = format!("/api/v1/matches/{match_id}/feedback");

    post_as(app.clone(), alice, &uri, json!({ "rating": 2 })).await;
    let response = post_as(app, alice, &uri, json!({ "rating": 4 })).await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["rating"], 4);

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM feedback WHERE match_id = $1")
        .bind(match_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn out_of_range_rating_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (alice, _, match_id) = setup(&pool).await;

    let response = post_as(
        app,
        alice,
        &format!("/api/v1/matches/{match_id}/feedback"),
        json!({ "rating": 6 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Cancellation and invalid transitions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn cancel_is_idempotent(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (alice, bob, match_id) = setup(&pool).await;
    let uri = format!("/api/v1/matches/{match_id}/cancel");

    let response = post_empty_as(app.clone(), alice, &uri).await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["status"], "cancelled");

    let response = post_empty_as(app, bob, &uri).await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["status"], "cancelled");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cancelled_match_rejects_further_transitions(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (alice, _, match_id) = setup(&pool).await;

    post_empty_as(
        app.clone(),
        alice,
        &format!("/api/v1/matches/{match_id}/cancel"),
    )
    .await;

    let response = post_empty_as(
        app.clone(),
        alice,
        &format!("/api/v1/matches/{match_id}/confirm-meetup"),
    )
    .await;
    let json = expect_status(response, StatusCode::CONFLICT).await;
    assert_eq!(json["code"], "INVALID_TRANSITION");

    let response = post_as(
        app,
        alice,
        &format!("/api/v1/matches/{match_id}/feedback"),
        json!({ "rating": 3 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn completed_match_cannot_be_cancelled(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (alice, bob, match_id) = setup(&pool).await;

    post_as(
        app.clone(),
        alice,
        &format!("/api/v1/matches/{match_id}/feedback"),
        json!({ "rating": 5 }),
    )
    .await;

    let response = post_empty_as(
        app,
        bob,
        &format!("/api/v1/matches/{match_id}/cancel"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
