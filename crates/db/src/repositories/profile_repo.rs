//! Repository for the `profiles` table.

use sqlx::PgPool;
use tablematch_core::types::DbId;

use crate::models::profile::{Profile, UpsertProfile};

/// Column list for `profiles` queries.
const COLUMNS: &str = "id, user_id, name, city, availability, food_preferences, \
                       allergies, bio, created_at, updated_at";

/// Provides CRUD operations for profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Fetch the profile for a user.
    pub async fn get_by_user(pool: &PgPool, user_id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE user_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Create or replace a user's profile. Upsert on `user_id`.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        profile: &UpsertProfile,
    ) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles \
                 (user_id, name, city, availability, food_preferences, allergies, bio) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (user_id) \
             DO UPDATE SET name = EXCLUDED.name, \
                           city = EXCLUDED.city, \
                           availability = EXCLUDED.availability, \
                           food_preferences = EXCLUDED.food_preferences, \
                           allergies = EXCLUDED.allergies, \
                           bio = EXCLUDED.bio, \
                           updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(&profile.name)
            .bind(&profile.city)
            .bind(profile.availability)
            .bind(&profile.food_preferences)
            .bind(&profile.allergies)
            .bind(&profile.bio)
            .fetch_one(pool)
            .await
    }
}
