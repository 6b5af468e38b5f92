//! Route definitions for dish swipes, mounted at `/swipes`.
//!
//! ```text
//! POST   /             -> swipe_dish
//! DELETE /{dish_id}    -> undo_swipe
//! ```

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::swipes;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(swipes::swipe_dish))
        .route("/{dish_id}", delete(swipes::undo_swipe))
}
