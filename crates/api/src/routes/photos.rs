//! Route definitions for food photos, mounted at `/photos`.
//!
//! ```text
//! GET    /        -> list_swipeable (the swipe deck)
//! POST   /        -> create_photo
//! DELETE /{id}    -> deactivate_photo
//! ```

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::photos;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(photos::list_swipeable).post(photos::create_photo))
        .route("/{id}", delete(photos::deactivate_photo))
}
