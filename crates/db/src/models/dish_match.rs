//! Dish match entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tablematch_core::lifecycle::MatchStatus;
use tablematch_core::types::{DbId, Timestamp};

/// A row from the `matches` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DishMatch {
    pub id: DbId,
    pub user1_id: DbId,
    pub user2_id: DbId,
    pub dish_id: DbId,
    pub status: MatchStatus,
    pub meeting_location: Option<String>,
    pub meeting_time: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DishMatch {
    /// The participant that isn't `user_id`.
    ///
    /// Callers must have already checked that `user_id` is a participant.
    pub fn other_user(&self, user_id: DbId) -> DbId {
        if self.user1_id == user_id {
            self.user2_id
        } else {
            self.user1_id
        }
    }

    /// Whether `user_id` is one of the two participants.
    pub fn involves(&self, user_id: DbId) -> bool {
        self.user1_id == user_id || self.user2_id == user_id
    }
}

/// Optional meetup details persisted with the `meetup_confirmed` transition.
#[derive(Debug, Default, Deserialize)]
pub struct MeetupDetails {
    pub meeting_location: Option<String>,
    pub meeting_time: Option<Timestamp>,
}
