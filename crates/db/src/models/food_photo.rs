//! Food photo models (user-owned swipeable items).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tablematch_core::types::{DbId, Timestamp};

/// A row from the `food_photos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FoodPhoto {
    pub id: DbId,
    pub user_id: DbId,
    pub image_url: String,
    pub caption: Option<String>,
    pub tags: Vec<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for posting a new photo.
#[derive(Debug, Deserialize)]
pub struct CreateFoodPhoto {
    pub image_url: String,
    pub caption: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}
