//! Repository for the `food_photos` table.

use sqlx::PgPool;
use tablematch_core::types::DbId;

use crate::models::food_photo::{CreateFoodPhoto, FoodPhoto};

/// Column list for `food_photos` queries.
const COLUMNS: &str = "id, user_id, image_url, caption, tags, is_active, created_at, updated_at";

/// Provides CRUD operations for food photos.
pub struct FoodPhotoRepo;

impl FoodPhotoRepo {
    /// Fetch a photo by ID.
    pub async fn get(pool: &PgPool, photo_id: DbId) -> Result<Option<FoodPhoto>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM food_photos WHERE id = $1");
        sqlx::query_as::<_, FoodPhoto>(&query)
            .bind(photo_id)
            .fetch_optional(pool)
            .await
    }

    /// List active photos for the swipe deck: not owned by `user_id` and not
    /// already swiped by them, newest first.
    pub async fn list_swipeable_for(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<FoodPhoto>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM food_photos p \
             WHERE p.is_active \
               AND p.user_id <> $1 \
               AND NOT EXISTS (
                   SELECT 1 FROM photo_swipes s \
                   WHERE s.photo_id = p.id AND s.swiper_user_id = $1
               ) \
             ORDER BY p.created_at DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, FoodPhoto>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Post a photo for a user, returning the generated ID.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        photo: &CreateFoodPhoto,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO food_photos (user_id, image_url, caption, tags) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(user_id)
        .bind(&photo.image_url)
        .bind(&photo.caption)
        .bind(&photo.tags)
        .fetch_one(pool)
        .await
    }

    /// Deactivate a photo so it stops appearing in swipe decks.
    ///
    /// Returns `true` if the photo belonged to the user and was active.
    pub async fn deactivate(
        pool: &PgPool,
        photo_id: DbId,
        owner_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE food_photos \
             SET is_active = FALSE, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 AND is_active",
        )
        .bind(photo_id)
        .bind(owner_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
