//! Pairwise compatibility scoring.
//!
//! `score` is a pure function from two profile views to an integer in
//! `[0, 100]`. No I/O, no randomness. The rules are applied in a fixed
//! order because the final ranking (and therefore which candidates a like
//! matches against first) depends on it:
//!
//! 1. base score 50;
//! 2. +30 if both profiles report the same city (exact string match);
//! 3. +20 if availability windows overlap;
//! 4. +5 per food preference present in both profiles;
//! 5. -5 if either profile has a non-empty allergy list (flat penalty);
//! 6. clamp to `[0, 100]`.

use serde::{Deserialize, Serialize};

/// Base score every pair starts from.
pub const BASE_SCORE: i32 = 50;

/// Bonus for an exact city match.
pub const SAME_CITY_BONUS: i32 = 30;

/// Bonus for overlapping availability windows.
pub const AVAILABILITY_BONUS: i32 = 20;

/// Bonus per food preference shared by both profiles.
pub const SHARED_PREFERENCE_BONUS: i32 = 5;

/// Flat penalty applied when either profile lists allergies.
pub const ALLERGY_PENALTY: i32 = 5;

/// Meal availability window, mirroring the `availability` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "availability", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Lunch,
    Dinner,
    Both,
}

impl Availability {
    /// Two windows overlap when either is `Both` or both are identical.
    pub fn overlaps(self, other: Availability) -> bool {
        self == Availability::Both || other == Availability::Both || self == other
    }
}

/// The profile attributes the scorer reads, borrowed from the stored row.
#[derive(Debug, Clone, Copy)]
pub struct ProfileView<'a> {
    pub city: &'a str,
    pub availability: Availability,
    pub food_preferences: &'a [String],
    pub allergies: &'a [String],
}

/// Compute the compatibility score between two profiles.
///
/// Deterministic and symmetric: `score(a, b) == score(b, a)`.
pub fn score(a: ProfileView<'_>, b: ProfileView<'_>) -> i32 {
    let mut score = BASE_SCORE;

    if a.city == b.city {
        score += SAME_CITY_BONUS;
    }

    if a.availability.overlaps(b.availability) {
        score += AVAILABILITY_BONUS;
    }

    let shared = a
        .food_preferences
        .iter()
        .filter(|pref| b.food_preferences.contains(pref))
        .count() as i32;
    score += shared * SHARED_PREFERENCE_BONUS;

    if !a.allergies.is_empty() || !b.allergies.is_empty() {
        score -= ALLERGY_PENALTY;
    }

    score.clamp(0, 100)
}
