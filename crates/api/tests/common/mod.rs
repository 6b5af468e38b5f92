//! Shared helpers for API integration tests.
//!
//! `build_test_app` mirrors the router construction in `main.rs` (via
//! [`build_app_router`]) so integration tests exercise the same middleware
//! stack that production uses.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use tablematch_api::auth::jwt::{generate_access_token, JwtConfig};
use tablematch_api::config::ServerConfig;
use tablematch_api::router::build_app_router;
use tablematch_api::state::AppState;
use tablematch_core::types::DbId;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        event_bus: Arc::new(tablematch_events::EventBus::default()),
    };
    build_app_router(state, &config)
}

/// Sign an access token for `user_id` with the test secret.
pub fn auth_token(user_id: DbId) -> String {
    generate_access_token(user_id, &test_config().jwt).expect("token generation")
}

/// Send a GET request without authentication.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request as `user_id`.
pub async fn get_as(app: Router, user_id: DbId, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {}", auth_token(user_id)))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body as `user_id`.
pub async fn post_as(
    app: Router,
    user_id: DbId,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("authorization", format!("Bearer {}", auth_token(user_id)))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with an empty body as `user_id`.
pub async fn post_empty_as(app: Router, user_id: DbId, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("authorization", format!("Bearer {}", auth_token(user_id)))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body as `user_id`.
pub async fn put_as(
    app: Router,
    user_id: DbId,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("authorization", format!("Bearer {}", auth_token(user_id)))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request as `user_id`.
pub async fn delete_as(app: Router, user_id: DbId, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("authorization", format!("Bearer {}", auth_token(user_id)))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
}

/// Assert status and return the parsed body.
pub async fn expect_status(
    response: Response<Body>,
    status: StatusCode,
) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Insert a user row, returning its id.
pub async fn seed_user(pool: &PgPool, email: &str) -> DbId {
    sqlx::query_scalar("INSERT INTO users (email, display_name) VALUES ($1, $1) RETURNING id")
        .bind(email)
        .fetch_one(pool)
        .await
        .expect("seed user")
}

/// Insert a user with a profile, returning the user id.
pub async fn seed_user_with_profile(pool: &PgPool, email: &str, city: &str) -> DbId {
    let user_id = seed_user(pool, email).await;
    sqlx::query(
        "INSERT INTO profiles (user_id, name, city, availability, food_preferences, allergies) \
         VALUES ($1, $2, $3, 'both', '{}', '{}')",
    )
    .bind(user_id)
    .bind(email)
    .bind(city)
    .execute(pool)
    .await
    .expect("seed profile");
    user_id
}

/// Insert a dish available today, returning its id.
pub async fn seed_dish(pool: &PgPool, name: &str) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO dishes (name, image_url, meal_type) \
         VALUES ($1, 'https://img.example/dish.jpg', 'dinner') RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .expect("seed dish")
}

/// Insert an active food photo owned by `owner`, returning its id.
pub async fn seed_photo(pool: &PgPool, owner: DbId) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO food_photos (user_id, image_url) \
         VALUES ($1, 'https://img.example/photo.jpg') RETURNING id",
    )
    .bind(owner)
    .fetch_one(pool)
    .await
    .expect("seed photo")
}
