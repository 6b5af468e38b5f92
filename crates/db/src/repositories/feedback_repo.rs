//! Repository for the `feedback` table.

use sqlx::PgPool;
use tablematch_core::types::DbId;

use crate::models::feedback::{Feedback, NewFeedback};

/// Column list for `feedback` queries.
const COLUMNS: &str =
    "id, match_id, user_id, rating, feedback_text, would_meet_again, created_at";

/// Provides access to meetup feedback.
pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Record a user's feedback on a match. Upsert on `(match_id, user_id)`
    /// so a replayed submission overwrites rather than duplicating.
    pub async fn upsert(
        pool: &PgPool,
        match_id: DbId,
        user_id: DbId,
        feedback: &NewFeedback,
    ) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (match_id, user_id, rating, feedback_text, would_meet_again) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (match_id, user_id) \
             DO UPDATE SET rating = EXCLUDED.rating, \
                           feedback_text = EXCLUDED.feedback_text, \
                           would_meet_again = EXCLUDED.would_meet_again \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(match_id)
            .bind(user_id)
            .bind(feedback.rating)
            .bind(&feedback.feedback_text)
            .bind(feedback.would_meet_again)
            .fetch_one(pool)
            .await
    }

    /// List feedback rows for a match.
    pub async fn list_for_match(
        pool: &PgPool,
        match_id: DbId,
    ) -> Result<Vec<Feedback>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedback WHERE match_id = $1 ORDER BY created_at");
        sqlx::query_as::<_, Feedback>(&query)
            .bind(match_id)
            .fetch_all(pool)
            .await
    }
}
