//! Candidate pool models.
//!
//! A candidate entry is a (user, dish) pair that has been liked and is
//! waiting for a partner. Listing joins the candidate's profile so the
//! arbiter can score without a second round trip.

use serde::Serialize;
use sqlx::FromRow;
use tablematch_core::compatibility::{Availability, ProfileView};
use tablematch_core::types::{DbId, Timestamp};

/// A row from the `match_queue` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CandidateEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub dish_id: DbId,
    pub priority_score: i32,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
}

/// An active candidate joined with its profile, as returned by
/// `CandidateRepo::list_active`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActiveCandidate {
    pub user_id: DbId,
    pub dish_id: DbId,
    pub priority_score: i32,
    /// When the entry was enqueued; the FIFO tie-breaker for equal scores.
    pub enqueued_at: Timestamp,
    pub expires_at: Timestamp,
    pub name: String,
    pub city: String,
    pub availability: Availability,
    pub food_preferences: Vec<String>,
    pub allergies: Vec<String>,
}

impl ActiveCandidate {
    /// Borrow the attributes the compatibility scorer reads.
    pub fn scoring_view(&self) -> ProfileView<'_> {
        ProfileView {
            city: &self.city,
            availability: self.availability,
            food_preferences: &self.food_preferences,
            allergies: &self.allergies,
        }
    }
}
