//! Dish catalog models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tablematch_core::types::{DbId, Timestamp};

/// A row from the `dishes` table: one entry in the shared daily catalog.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dish {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: String,
    pub meal_type: MealType,
    pub mood_tags: Vec<String>,
    pub available_date: NaiveDate,
    pub created_at: Timestamp,
}

/// Meal slot a dish belongs to, mirroring the `meal_type` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "meal_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// DTO for adding a dish to the catalog (seeding / admin tooling).
#[derive(Debug, Deserialize)]
pub struct CreateDish {
    pub name: String,
    pub description: Option<String>,
    pub image_url: String,
    pub meal_type: MealType,
    #[serde(default)]
    pub mood_tags: Vec<String>,
    pub available_date: Option<NaiveDate>,
}
