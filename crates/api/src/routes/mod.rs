pub mod dishes;
pub mod health;
pub mod matches;
pub mod photos;
pub mod profile;
pub mod swipes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /profile                          get, upsert (PUT)
///
/// /dishes                           list (today by default), create
/// /dishes/{id}                      get
///
/// /swipes                           record a dish swipe (POST)
/// /swipes/{dish_id}                 undo (DELETE)
///
/// /photos                           swipe deck (GET), post (POST)
/// /photos/{id}                      deactivate (DELETE)
/// /photo-swipes                     record a photo swipe (POST)
///
/// /matches                          list (optionally ?status=)
/// /matches/{id}                     get
/// /matches/{id}/confirm-meetup     transition to meetup_confirmed (POST)
/// /matches/{id}/feedback            record feedback + complete (POST)
/// /matches/{id}/cancel              transition to cancelled (POST)
/// /photo-matches                    list photo matches
/// ```
///
/// Everything here requires a Bearer token; `/health` is mounted separately
/// at the root.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/profile", profile::router())
        .nest("/dishes", dishes::router())
        .nest("/swipes", swipes::router())
        .nest("/photos", photos::router())
        .merge(matches::router())
}
