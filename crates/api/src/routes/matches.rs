//! Route definitions for matches, photo matches, and photo swipes.
//!
//! These share a router because photo swipes and photo matches sit at the
//! same top level as `/matches`:
//!
//! ```text
//! GET  /matches                       -> list_matches
//! GET  /matches/{id}                  -> get_match
//! POST /matches/{id}/confirm-meetup   -> confirm_meetup
//! POST /matches/{id}/feedback         -> submit_feedback
//! POST /matches/{id}/cancel           -> cancel_match
//! GET  /photo-matches                 -> list_photo_matches
//! POST /photo-swipes                  -> swipe_photo
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{matches, photo_swipes};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/matches", get(matches::list_matches))
        .route("/matches/{id}", get(matches::get_match))
        .route("/matches/{id}/confirm-meetup", post(matches::confirm_meetup))
        .route("/matches/{id}/feedback", post(matches::submit_feedback))
        .route("/matches/{id}/cancel", post(matches::cancel_match))
        .route("/photo-matches", get(matches::list_photo_matches))
        .route("/photo-swipes", post(photo_swipes::swipe_photo))
}
