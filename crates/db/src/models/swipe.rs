//! Preference-store rows: one logical swipe per (swiper, item).

use serde::Serialize;
use sqlx::FromRow;
use tablematch_core::types::{DbId, Timestamp};

/// A row from the `dish_swipes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DishSwipe {
    pub id: DbId,
    pub user_id: DbId,
    pub dish_id: DbId,
    pub liked: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `photo_swipes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PhotoSwipe {
    pub id: DbId,
    pub swiper_user_id: DbId,
    pub photo_id: DbId,
    pub choice: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
