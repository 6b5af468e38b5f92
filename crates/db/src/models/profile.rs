//! Profile entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tablematch_core::compatibility::{Availability, ProfileView};
use tablematch_core::types::{DbId, Timestamp};

/// A row from the `profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub city: String,
    pub availability: Availability,
    pub food_preferences: Vec<String>,
    pub allergies: Vec<String>,
    pub bio: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Profile {
    /// Borrow the attributes the compatibility scorer reads.
    pub fn scoring_view(&self) -> ProfileView<'_> {
        ProfileView {
            city: &self.city,
            availability: self.availability,
            food_preferences: &self.food_preferences,
            allergies: &self.allergies,
        }
    }

    /// The subset of a profile shown to the matched counterpart.
    pub fn public(&self) -> PublicProfile {
        PublicProfile {
            user_id: self.user_id,
            name: self.name.clone(),
            city: self.city.clone(),
        }
    }
}

/// What one user sees of another inside a match summary.
#[derive(Debug, Clone, Serialize)]
pub struct PublicProfile {
    pub user_id: DbId,
    pub name: String,
    pub city: String,
}

/// DTO for creating or replacing the caller's profile.
#[derive(Debug, Deserialize)]
pub struct UpsertProfile {
    pub name: String,
    pub city: String,
    pub availability: Availability,
    #[serde(default)]
    pub food_preferences: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    pub bio: Option<String>,
}
