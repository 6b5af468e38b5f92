//! Repository for the `dishes` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use tablematch_core::types::DbId;

use crate::models::dish::{CreateDish, Dish};

/// Column list for `dishes` queries.
const COLUMNS: &str =
    "id, name, description, image_url, meal_type, mood_tags, available_date, created_at";

/// Provides CRUD operations for the daily dish catalog.
pub struct DishRepo;

impl DishRepo {
    /// Fetch a dish by ID.
    pub async fn get(pool: &PgPool, dish_id: DbId) -> Result<Option<Dish>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dishes WHERE id = $1");
        sqlx::query_as::<_, Dish>(&query)
            .bind(dish_id)
            .fetch_optional(pool)
            .await
    }

    /// List the catalog for a calendar date, oldest entry first.
    pub async fn list_for_date(pool: &PgPool, date: NaiveDate) -> Result<Vec<Dish>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM dishes \
             WHERE available_date = $1 \
             ORDER BY created_at"
        );
        sqlx::query_as::<_, Dish>(&query)
            .bind(date)
            .fetch_all(pool)
            .await
    }

    /// Add a dish to the catalog, returning the generated ID.
    ///
    /// `available_date` defaults to today when the DTO leaves it unset.
    pub async fn create(pool: &PgPool, dish: &CreateDish) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO dishes \
                 (name, description, image_url, meal_type, mood_tags, available_date) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, CURRENT_DATE)) \
             RETURNING id",
        )
        .bind(&dish.name)
        .bind(&dish.description)
        .bind(&dish.image_url)
        .bind(dish.meal_type)
        .bind(&dish.mood_tags)
        .bind(dish.available_date)
        .fetch_one(pool)
        .await
    }
}
