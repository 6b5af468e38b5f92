//! Handlers for food photos: the swipe deck and the caller's own uploads.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tablematch_core::error::CoreError;
use tablematch_core::types::DbId;
use tablematch_db::models::food_photo::CreateFoodPhoto;
use tablematch_db::repositories::FoodPhotoRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const DEFAULT_DECK_SIZE: i64 = 20;

/// Query parameters for the photo swipe deck.
#[derive(Debug, Deserialize)]
pub struct DeckParams {
    pub limit: Option<i64>,
}

/// GET /api/v1/photos
///
/// The caller's swipe deck: active photos they don't own and haven't
/// already swiped, newest first.
pub async fn list_swipeable(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<DeckParams>,
) -> AppResult<impl IntoResponse> {
    let photos = FoodPhotoRepo::list_swipeable_for(
        &state.pool,
        auth.user_id,
        params.limit.unwrap_or(DEFAULT_DECK_SIZE),
    )
    .await?;

    Ok(Json(DataResponse { data: photos }))
}

/// POST /api/v1/photos
///
/// Post a photo for others to swipe on.
pub async fn create_photo(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateFoodPhoto>,
) -> AppResult<impl IntoResponse> {
    let photo_id = FoodPhotoRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(photo_id, user_id = auth.user_id, "Photo posted");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: json!({ "id": photo_id }),
        }),
    ))
}

/// DELETE /api/v1/photos/{id}
///
/// Deactivate one of the caller's photos so it leaves the swipe deck.
/// Existing swipes on it still count toward mutual-like tallies.
pub async fn deactivate_photo(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(photo_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deactivated = FoodPhotoRepo::deactivate(&state.pool, photo_id, auth.user_id).await?;
    if !deactivated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Photo",
            id: photo_id,
        }));
    }

    tracing::info!(photo_id, user_id = auth.user_id, "Photo deactivated");

    Ok(StatusCode::NO_CONTENT)
}
