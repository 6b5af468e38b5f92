//! Repository for the `photo_matches` table.
//!
//! Rows are keyed by the unordered user pair (no item dimension); `create`
//! canonicalizes the ordering so `uq_photo_matches_pair` can guard against
//! concurrent duplicates.

use sqlx::PgPool;
use tablematch_core::types::DbId;

use crate::models::photo_match::PhotoMatch;

/// Column list for `photo_matches` queries.
const COLUMNS: &str =
    "id, user1_id, user2_id, mutual_likes_count, status, created_at, updated_at";

/// Provides CRUD operations for photo matches.
pub struct PhotoMatchRepo;

impl PhotoMatchRepo {
    /// Find an existing match between two users, checking both orderings.
    pub async fn find_between(
        pool: &PgPool,
        user_a: DbId,
        user_b: DbId,
    ) -> Result<Option<PhotoMatch>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM photo_matches \
             WHERE (user1_id = $1 AND user2_id = $2) OR (user1_id = $2 AND user2_id = $1)"
        );
        sqlx::query_as::<_, PhotoMatch>(&query)
            .bind(user_a)
            .bind(user_b)
            .fetch_optional(pool)
            .await
    }

    /// Create a match for the unordered pair with the mutual-like count
    /// that fired it. Stores `user1_id = min, user2_id = max`.
    pub async fn create(
        pool: &PgPool,
        user_a: DbId,
        user_b: DbId,
        mutual_likes_count: i32,
    ) -> Result<PhotoMatch, sqlx::Error> {
        let (user1, user2) = if user_a < user_b {
            (user_a, user_b)
        } else {
            (user_b, user_a)
        };
        let query = format!(
            "INSERT INTO photo_matches (user1_id, user2_id, mutual_likes_count, status) \
             VALUES ($1, $2, $3, 'matched') \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PhotoMatch>(&query)
            .bind(user1)
            .bind(user2)
            .bind(mutual_likes_count)
            .fetch_one(pool)
            .await
    }

    /// List photo matches where the user is either participant, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PhotoMatch>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM photo_matches \
             WHERE user1_id = $1 OR user2_id = $1 \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, PhotoMatch>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
