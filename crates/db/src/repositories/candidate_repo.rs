//! Repository for the `match_queue` table (candidate pool).
//!
//! Entries expire 24 hours after enqueue. Expiry is enforced on read —
//! `list_active` filters on `expires_at` — so correctness never depends on
//! the background sweep that physically deletes stale rows.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use tablematch_core::types::{DbId, Timestamp};

use crate::models::candidate::{ActiveCandidate, CandidateEntry};

/// How long a pool entry stays eligible after enqueue.
const ENTRY_TTL_HOURS: i64 = 24;

/// Column list for `match_queue` queries.
const COLUMNS: &str = "id, user_id, dish_id, priority_score, created_at, expires_at";

/// Provides access to the candidate pool of outstanding likes.
pub struct CandidateRepo;

impl CandidateRepo {
    /// Insert or refresh a pool entry. Upsert on `(user_id, dish_id)`:
    /// re-liking a dish pushes `expires_at` forward instead of erroring,
    /// so enqueue after expiry-and-cleanup is simply a fresh insert.
    pub async fn enqueue(
        pool: &PgPool,
        user_id: DbId,
        dish_id: DbId,
        priority_score: i32,
    ) -> Result<CandidateEntry, sqlx::Error> {
        let expires_at = Utc::now() + Duration::hours(ENTRY_TTL_HOURS);
        let query = format!(
            "INSERT INTO match_queue (user_id, dish_id, priority_score, expires_at) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (user_id, dish_id) \
             DO UPDATE SET priority_score = EXCLUDED.priority_score, \
                           expires_at = EXCLUDED.expires_at \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CandidateEntry>(&query)
            .bind(user_id)
            .bind(dish_id)
            .bind(priority_score)
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    /// List non-expired candidates for a dish, excluding the triggering
    /// user, joined with their profiles and ordered by enqueue time (FIFO).
    ///
    /// `same_city_only` restricts results to profiles in the given city.
    /// The query is restartable — no cursor state; callers may re-run it.
    pub async fn list_active(
        pool: &PgPool,
        dish_id: DbId,
        excluding_user: DbId,
        same_city_only: Option<&str>,
    ) -> Result<Vec<ActiveCandidate>, sqlx::Error> {
        let city_filter = if same_city_only.is_some() {
            "AND pr.city = $3"
        } else {
            ""
        };
        let query = format!(
            "SELECT q.user_id, q.dish_id, q.priority_score, \
                    q.created_at AS enqueued_at, q.expires_at, \
                    pr.name, pr.city, pr.availability, pr.food_preferences, pr.allergies \
             FROM match_queue q \
             JOIN profiles pr ON pr.user_id = q.user_id \
             WHERE q.dish_id = $1 \
               AND q.user_id <> $2 \
               AND q.expires_at > NOW() \
               {city_filter} \
             ORDER BY q.created_at"
        );
        let mut q = sqlx::query_as::<_, ActiveCandidate>(&query)
            .bind(dish_id)
            .bind(excluding_user);
        if let Some(city) = same_city_only {
            q = q.bind(city);
        }
        q.fetch_all(pool).await
    }

    /// Remove a pool entry. Idempotent: evicting a missing entry is a no-op.
    pub async fn evict(pool: &PgPool, user_id: DbId, dish_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM match_queue WHERE user_id = $1 AND dish_id = $2")
            .bind(user_id)
            .bind(dish_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Remove both participants' entries for a dish after a match.
    pub async fn evict_pair(
        pool: &PgPool,
        user_a: DbId,
        user_b: DbId,
        dish_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM match_queue WHERE dish_id = $1 AND user_id = ANY($2)")
            .bind(dish_id)
            .bind(vec![user_a, user_b])
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Physically delete entries that expired before `cutoff`.
    ///
    /// Returns the number of rows purged. Used by the background sweep.
    pub async fn purge_expired(pool: &PgPool, cutoff: Timestamp) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM match_queue WHERE expires_at <= $1")
            .bind(cutoff)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
