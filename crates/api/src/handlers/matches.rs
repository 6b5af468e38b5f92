//! Handlers for the match lifecycle.
//!
//! Matches are created only by the arbiter; these endpoints read them and
//! drive the explicit lifecycle transitions (confirm meetup, submit
//! feedback, cancel). Replaying a transition the match has already made is
//! a no-op success; transitions the state machine forbids are 409s.
//!
//! A match id the caller is not a participant of is reported as 404, the
//! same as a nonexistent one.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tablematch_core::error::CoreError;
use tablematch_core::lifecycle::{self, MatchStatus};
use tablematch_core::types::DbId;
use tablematch_db::models::dish_match::{DishMatch, MeetupDetails};
use tablematch_db::models::feedback::NewFeedback;
use tablematch_db::repositories::{FeedbackRepo, MatchRepo, PhotoMatchRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: i64 = 50;

/// Query parameters for listing matches.
#[derive(Debug, Deserialize)]
pub struct ListMatchesParams {
    pub status: Option<MatchStatus>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Load a match and verify the caller participates in it.
async fn load_for_participant(
    state: &AppState,
    match_id: DbId,
    user_id: DbId,
) -> AppResult<DishMatch> {
    let m = MatchRepo::get(&state.pool, match_id)
        .await?
        .filter(|m| m.involves(user_id))
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Match",
            id: match_id,
        }))?;
    Ok(m)
}

/// GET /api/v1/matches
///
/// List the caller's matches, newest first, optionally filtered by status.
pub async fn list_matches(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListMatchesParams>,
) -> AppResult<impl IntoResponse> {
    let matches = MatchRepo::list_for_user(
        &state.pool,
        auth.user_id,
        params.status,
        params.limit.unwrap_or(DEFAULT_PAGE_SIZE),
        params.offset.unwrap_or(0),
    )
    .await?;

    Ok(Json(DataResponse { data: matches }))
}

/// GET /api/v1/matches/{id}
pub async fn get_match(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(match_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let m = load_for_participant(&state, match_id, auth.user_id).await?;

    Ok(Json(DataResponse { data: m }))
}

/// POST /api/v1/matches/{id}/confirm-meetup
///
/// Transition to `meetup_confirmed`, optionally recording where and when.
/// Replaying the confirmation succeeds without touching the row again.
pub async fn confirm_meetup(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(match_id): Path<DbId>,
    details: Option<Json<MeetupDetails>>,
) -> AppResult<impl IntoResponse> {
    let m = load_for_participant(&state, match_id, auth.user_id).await?;

    if m.status == MatchStatus::MeetupConfirmed {
        return Ok(Json(DataResponse { data: m }));
    }
    lifecycle::validate_transition(m.status, MatchStatus::MeetupConfirmed)?;

    let details = details.map(|Json(d)| d).unwrap_or_default();
    let updated = MatchRepo::confirm_meetup(
        &state.pool,
        match_id,
        details.meeting_location.as_deref(),
        details.meeting_time,
    )
    .await?;

    tracing::info!(match_id, user_id = auth.user_id, "Meetup confirmed");

    Ok(Json(DataResponse { data: updated }))
}

/// POST /api/v1/matches/{id}/feedback
///
/// Record the caller's feedback and complete the match. Feedback can be
/// submitted straight from `matched`; a resubmission overwrites the earlier
/// feedback and leaves the (already completed) status alone.
pub async fn submit_feedback(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(match_id): Path<DbId>,
    Json(input): Json<NewFeedback>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let m = load_for_participant(&state, match_id, auth.user_id).await?;

    if m.status != MatchStatus::Completed {
        lifecycle::validate_transition(m.status, MatchStatus::Completed)?;
    }

    let feedback = FeedbackRepo::upsert(&state.pool, match_id, auth.user_id, &input).await?;

    if m.status != MatchStatus::Completed {
        MatchRepo::update_status(&state.pool, match_id, MatchStatus::Completed).await?;
    }

    tracing::info!(
        match_id,
        user_id = auth.user_id,
        rating = input.rating,
        "Feedback submitted"
    );

    Ok(Json(DataResponse { data: feedback }))
}

/// POST /api/v1/matches/{id}/cancel
///
/// Cancel the match. Valid from any non-terminal state; replaying the
/// cancellation is a no-op success.
pub async fn cancel_match(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(match_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let m = load_for_participant(&state, match_id, auth.user_id).await?;

    if m.status == MatchStatus::Cancelled {
        return Ok(Json(DataResponse { data: m }));
    }
    lifecycle::validate_transition(m.status, MatchStatus::Cancelled)?;

    let updated = MatchRepo::update_status(&state.pool, match_id, MatchStatus::Cancelled).await?;

    tracing::info!(match_id, user_id = auth.user_id, "Match cancelled");

    Ok(Json(DataResponse { data: updated }))
}

/// Query parameters for listing photo matches.
#[derive(Debug, Deserialize)]
pub struct ListPhotoMatchesParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /api/v1/photo-matches
///
/// List the caller's photo matches, newest first.
pub async fn list_photo_matches(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListPhotoMatchesParams>,
) -> AppResult<impl IntoResponse> {
    let matches = PhotoMatchRepo::list_for_user(
        &state.pool,
        auth.user_id,
        params.limit.unwrap_or(DEFAULT_PAGE_SIZE),
        params.offset.unwrap_or(0),
    )
    .await?;

    Ok(Json(DataResponse { data: matches }))
}
