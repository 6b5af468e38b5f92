//! Handlers for dish swipes: the entry point into dish matching.
//!
//! A like writes the preference row, enqueues the user into the candidate
//! pool for the dish, and hands off to the arbiter. A pass only writes the
//! preference row. All endpoints require authentication via [`AuthUser`].

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use tablematch_core::error::CoreError;
use tablematch_core::types::DbId;
use tablematch_db::repositories::{CandidateRepo, DishRepo, DishSwipeRepo, ProfileRepo};

use crate::error::{AppError, AppResult};
use crate::matching::{self, SwipeOutcome};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Priority assigned to every pool entry at enqueue time.
///
/// Kept as a column for future tuning; ranking currently comes from the
/// compatibility score, not this value.
const DEFAULT_PRIORITY_SCORE: i32 = 50;

/// Request body for recording a dish swipe.
#[derive(Debug, Deserialize)]
pub struct SwipeRequest {
    pub dish_id: DbId,
    pub liked: bool,
}

/// POST /api/v1/swipes
///
/// Record a swipe decision on a dish. Likes enter the candidate pool and
/// may produce matches immediately; the response carries any matches
/// created. Re-swiping the same dish overwrites the prior decision.
pub async fn swipe_dish(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SwipeRequest>,
) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::get_by_user(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "A profile is required before swiping".into(),
            ))
        })?;

    DishRepo::get(&state.pool, input.dish_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Dish",
            id: input.dish_id,
        }))?;

    DishSwipeRepo::upsert(&state.pool, auth.user_id, input.dish_id, input.liked).await?;

    if !input.liked {
        // A pass never participates in matching; drop any stale pool entry.
        CandidateRepo::evict(&state.pool, auth.user_id, input.dish_id).await?;
        return Ok(Json(DataResponse {
            data: SwipeOutcome {
                matched: false,
                matches: Vec::new(),
            },
        }));
    }

    CandidateRepo::enqueue(
        &state.pool,
        auth.user_id,
        input.dish_id,
        DEFAULT_PRIORITY_SCORE,
    )
    .await?;

    let outcome =
        matching::on_dish_like(&state.pool, &state.event_bus, &profile, input.dish_id).await?;

    tracing::debug!(
        user_id = auth.user_id,
        dish_id = input.dish_id,
        matched = outcome.matched,
        "Dish swipe processed"
    );

    Ok(Json(DataResponse { data: outcome }))
}

/// Response payload for a swipe undo.
#[derive(Debug, Serialize)]
pub struct UndoResponse {
    pub removed: bool,
}

/// DELETE /api/v1/swipes/{dish_id}
///
/// Undo a swipe: removes the preference row and the pool entry. Idempotent;
/// matches already created by the original swipe are left untouched.
pub async fn undo_swipe(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(dish_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = DishSwipeRepo::delete(&state.pool, auth.user_id, dish_id).await?;
    CandidateRepo::evict(&state.pool, auth.user_id, dish_id).await?;

    if removed {
        tracing::debug!(user_id = auth.user_id, dish_id, "Swipe undone");
    }

    Ok(Json(DataResponse {
        data: UndoResponse { removed },
    }))
}
