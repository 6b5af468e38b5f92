//! Route definitions for the dish catalog, mounted at `/dishes`.
//!
//! ```text
//! GET  /        -> list_dishes
//! POST /        -> create_dish
//! GET  /{id}    -> get_dish
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::dishes;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dishes::list_dishes).post(dishes::create_dish))
        .route("/{id}", get(dishes::get_dish))
}
