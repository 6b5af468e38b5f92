//! Repository for the `dish_swipes` table (dish preference store).

use sqlx::PgPool;
use tablematch_core::types::DbId;

use crate::models::swipe::DishSwipe;

/// Column list for `dish_swipes` queries.
const COLUMNS: &str = "id, user_id, dish_id, liked, created_at, updated_at";

/// Provides upsert-style access to dish swipe decisions.
pub struct DishSwipeRepo;

impl DishSwipeRepo {
    /// Record a swipe decision. Upsert on `(user_id, dish_id)`: re-swiping
    /// the same dish overwrites the prior decision, never accumulates rows.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        dish_id: DbId,
        liked: bool,
    ) -> Result<DishSwipe, sqlx::Error> {
        let query = format!(
            "INSERT INTO dish_swipes (user_id, dish_id, liked) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, dish_id) \
             DO UPDATE SET liked = EXCLUDED.liked, updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DishSwipe>(&query)
            .bind(user_id)
            .bind(dish_id)
            .bind(liked)
            .fetch_one(pool)
            .await
    }

    /// Fetch a user's decision on a dish, if any.
    pub async fn get(
        pool: &PgPool,
        user_id: DbId,
        dish_id: DbId,
    ) -> Result<Option<DishSwipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dish_swipes WHERE user_id = $1 AND dish_id = $2");
        sqlx::query_as::<_, DishSwipe>(&query)
            .bind(user_id)
            .bind(dish_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a swipe (undo). Idempotent: deleting a non-existent row is a
    /// no-op. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, dish_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dish_swipes WHERE user_id = $1 AND dish_id = $2")
            .bind(user_id)
            .bind(dish_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
