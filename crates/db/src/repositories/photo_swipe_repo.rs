//! Repository for the `photo_swipes` table (photo preference store).

use sqlx::PgPool;
use tablematch_core::types::DbId;

use crate::models::swipe::PhotoSwipe;

/// Column list for `photo_swipes` queries.
const COLUMNS: &str = "id, swiper_user_id, photo_id, choice, created_at, updated_at";

/// Provides upsert-style access to photo swipe decisions and the pairwise
/// like counts the mutual-like arbiter reads.
pub struct PhotoSwipeRepo;

impl PhotoSwipeRepo {
    /// Record a swipe decision. Upsert on `(swiper_user_id, photo_id)`.
    pub async fn upsert(
        pool: &PgPool,
        swiper_user_id: DbId,
        photo_id: DbId,
        choice: bool,
    ) -> Result<PhotoSwipe, sqlx::Error> {
        let query = format!(
            "INSERT INTO photo_swipes (swiper_user_id, photo_id, choice) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (swiper_user_id, photo_id) \
             DO UPDATE SET choice = EXCLUDED.choice, updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PhotoSwipe>(&query)
            .bind(swiper_user_id)
            .bind(photo_id)
            .bind(choice)
            .fetch_one(pool)
            .await
    }

    /// Count likes by `swiper` on any photo owned by `owner`.
    ///
    /// This is the global pairwise count the mutual-like threshold is
    /// evaluated against — across all of the owner's photos, not per-photo.
    pub async fn count_likes_on_owner(
        pool: &PgPool,
        swiper: DbId,
        owner: DbId,
    ) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM photo_swipes s \
             JOIN food_photos p ON p.id = s.photo_id \
             WHERE s.swiper_user_id = $1 AND s.choice AND p.user_id = $2",
        )
        .bind(swiper)
        .bind(owner)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }
}
