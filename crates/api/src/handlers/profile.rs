//! Handlers for the caller's own profile.
//!
//! Profiles carry the attributes the compatibility scorer reads (city,
//! availability, food preferences, allergies); a user must have one before
//! they can swipe on dishes.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tablematch_core::error::CoreError;
use tablematch_db::models::profile::UpsertProfile;
use tablematch_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::get_by_user(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: auth.user_id,
        }))?;

    Ok(Json(DataResponse { data: profile }))
}

/// PUT /api/v1/profile
///
/// Create or replace the caller's profile.
pub async fn upsert_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpsertProfile>,
) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::upsert(&state.pool, auth.user_id, &input).await?;

    tracing::info!(user_id = auth.user_id, "Profile upserted");

    Ok(Json(DataResponse { data: profile }))
}
