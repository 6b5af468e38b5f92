//! Photo match entity model.
//!
//! Photo matches are keyed by the unordered user pair directly (not
//! per-photo); `mutual_likes_count` records the reciprocal-like count that
//! fired the match.

use serde::Serialize;
use sqlx::FromRow;
use tablematch_core::types::{DbId, Timestamp};

/// A row from the `photo_matches` table. `user1_id < user2_id` always.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PhotoMatch {
    pub id: DbId,
    pub user1_id: DbId,
    pub user2_id: DbId,
    pub mutual_likes_count: i32,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PhotoMatch {
    /// The participant that isn't `user_id`.
    pub fn other_user(&self, user_id: DbId) -> DbId {
        if self.user1_id == user_id {
            self.user2_id
        } else {
            self.user1_id
        }
    }
}
