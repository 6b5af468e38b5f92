//! Handlers for photo swipes: the entry point into photo matching.
//!
//! Swiping on your own photo is forbidden. A like feeds the pairwise
//! mutual-like tally evaluated by [`crate::matching::photo`].

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tablematch_core::error::CoreError;
use tablematch_core::types::DbId;
use tablematch_db::repositories::{FoodPhotoRepo, PhotoSwipeRepo};

use crate::error::{AppError, AppResult};
use crate::matching::{self, PhotoSwipeOutcome};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for recording a photo swipe.
#[derive(Debug, Deserialize)]
pub struct PhotoSwipeRequest {
    pub photo_id: DbId,
    pub choice: bool,
}

/// POST /api/v1/photo-swipes
///
/// Record a swipe decision on another user's photo. Likes count toward the
/// pairwise mutual-like tally; crossing the threshold creates the photo
/// match and the response carries its details.
pub async fn swipe_photo(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<PhotoSwipeRequest>,
) -> AppResult<impl IntoResponse> {
    let photo = FoodPhotoRepo::get(&state.pool, input.photo_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Photo",
            id: input.photo_id,
        }))?;

    // Ownership check comes before any write.
    if photo.user_id == auth.user_id {
        return Err(AppError::Core(CoreError::SelfSwipe));
    }

    PhotoSwipeRepo::upsert(&state.pool, auth.user_id, input.photo_id, input.choice).await?;

    let outcome = if input.choice {
        matching::on_photo_like(&state.pool, &state.event_bus, auth.user_id, photo.user_id).await?
    } else {
        PhotoSwipeOutcome {
            matched: false,
            match_data: None,
        }
    };

    tracing::debug!(
        user_id = auth.user_id,
        photo_id = input.photo_id,
        matched = outcome.matched,
        "Photo swipe processed"
    );

    Ok(Json(DataResponse { data: outcome }))
}
