//! Route definitions for the caller's profile, mounted at `/profile`.
//!
//! ```text
//! GET /     -> get_profile
//! PUT /     -> upsert_profile
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(profile::get_profile).put(profile::upsert_profile))
}
