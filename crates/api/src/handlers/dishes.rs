//! Handlers for the daily dish catalog.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;
use tablematch_core::error::CoreError;
use tablematch_core::types::DbId;
use tablematch_db::models::dish::CreateDish;
use tablematch_db::repositories::DishRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for listing the catalog.
#[derive(Debug, Deserialize)]
pub struct ListDishesParams {
    /// Calendar date to list; defaults to today (UTC).
    pub date: Option<NaiveDate>,
}

/// GET /api/v1/dishes
///
/// List the dish catalog for a date (today by default).
pub async fn list_dishes(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListDishesParams>,
) -> AppResult<impl IntoResponse> {
    let date = params.date.unwrap_or_else(|| Utc::now().date_naive());
    let dishes = DishRepo::list_for_date(&state.pool, date).await?;

    Ok(Json(DataResponse { data: dishes }))
}

/// GET /api/v1/dishes/{id}
pub async fn get_dish(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(dish_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let dish = DishRepo::get(&state.pool, dish_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Dish",
            id: dish_id,
        }))?;

    Ok(Json(DataResponse { data: dish }))
}

/// POST /api/v1/dishes
///
/// Add a dish to the catalog. Used by seeding and curation tooling.
pub async fn create_dish(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateDish>,
) -> AppResult<impl IntoResponse> {
    let dish_id = DishRepo::create(&state.pool, &input).await?;

    tracing::info!(dish_id, user_id = auth.user_id, "Dish created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: json!({ "id": dish_id }),
        }),
    ))
}
