//! Meetup feedback models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tablematch_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `feedback` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: DbId,
    pub match_id: DbId,
    pub user_id: DbId,
    pub rating: i32,
    pub feedback_text: Option<String>,
    pub would_meet_again: bool,
    pub created_at: Timestamp,
}

/// DTO for submitting feedback on a match.
#[derive(Debug, Deserialize, Validate)]
pub struct NewFeedback {
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    pub feedback_text: Option<String>,
    #[serde(default)]
    pub would_meet_again: bool,
}
