//! Repository for the `matches` table.
//!
//! The `uq_matches_pair` unique index (canonicalized pair + dish) is the
//! authority on duplicate matches; `find_between` is an optimization, not
//! the guard. Concurrent inserts for the same pair surface as a 23505 the
//! arbiter swallows.

use sqlx::PgPool;
use tablematch_core::lifecycle::MatchStatus;
use tablematch_core::types::{DbId, Timestamp};

use crate::models::dish_match::DishMatch;

/// Column list for `matches` queries.
const COLUMNS: &str = "id, user1_id, user2_id, dish_id, status, meeting_location, \
                       meeting_time, created_at, updated_at";

/// Provides CRUD operations for dish matches.
pub struct MatchRepo;

impl MatchRepo {
    /// Fetch a match by ID.
    pub async fn get(pool: &PgPool, match_id: DbId) -> Result<Option<DishMatch>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM matches WHERE id = $1");
        sqlx::query_as::<_, DishMatch>(&query)
            .bind(match_id)
            .fetch_optional(pool)
            .await
    }

    /// Find an existing match between two users for a dish, checking both
    /// participant orderings.
    pub async fn find_between(
        pool: &PgPool,
        user_a: DbId,
        user_b: DbId,
        dish_id: DbId,
    ) -> Result<Option<DishMatch>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM matches \
             WHERE dish_id = $3 \
               AND ((user1_id = $1 AND user2_id = $2) OR (user1_id = $2 AND user2_id = $1))"
        );
        sqlx::query_as::<_, DishMatch>(&query)
            .bind(user_a)
            .bind(user_b)
            .bind(dish_id)
            .fetch_optional(pool)
            .await
    }

    /// Create a match in `matched` status.
    ///
    /// Fails with a database unique violation on `uq_matches_pair` if a
    /// match for the unordered pair already exists for this dish.
    pub async fn create(
        pool: &PgPool,
        user1_id: DbId,
        user2_id: DbId,
        dish_id: DbId,
    ) -> Result<DishMatch, sqlx::Error> {
        let query = format!(
            "INSERT INTO matches (user1_id, user2_id, dish_id, status) \
             VALUES ($1, $2, $3, 'matched') \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DishMatch>(&query)
            .bind(user1_id)
            .bind(user2_id)
            .bind(dish_id)
            .fetch_one(pool)
            .await
    }

    /// List matches where the user is either participant, newest first,
    /// optionally filtered by status.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        status: Option<MatchStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<DishMatch>, sqlx::Error> {
        let filter = if status.is_some() {
            "AND status = $4"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM matches \
             WHERE (user1_id = $1 OR user2_id = $1) {filter} \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        let mut q = sqlx::query_as::<_, DishMatch>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset);
        if let Some(status) = status {
            q = q.bind(status);
        }
        q.fetch_all(pool).await
    }

    /// Set a match's status, returning the updated row.
    pub async fn update_status(
        pool: &PgPool,
        match_id: DbId,
        status: MatchStatus,
    ) -> Result<DishMatch, sqlx::Error> {
        let query = format!(
            "UPDATE matches \
             SET status = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DishMatch>(&query)
            .bind(match_id)
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// Confirm the meetup: transition to `meetup_confirmed` and persist the
    /// optional meeting details in the same statement.
    pub async fn confirm_meetup(
        pool: &PgPool,
        match_id: DbId,
        meeting_location: Option<&str>,
        meeting_time: Option<Timestamp>,
    ) -> Result<DishMatch, sqlx::Error> {
        let query = format!(
            "UPDATE matches \
             SET status = 'meetup_confirmed', \
                 meeting_location = COALESCE($2, meeting_location), \
                 meeting_time = COALESCE($3, meeting_time), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DishMatch>(&query)
            .bind(match_id)
            .bind(meeting_location)
            .bind(meeting_time)
            .fetch_one(pool)
            .await
    }
}
