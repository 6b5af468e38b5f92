//! Repository for the `users` table.

use sqlx::PgPool;
use tablematch_core::types::DbId;

use crate::models::user::User;

/// Column list for `users` queries.
const COLUMNS: &str = "id, email, display_name, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Create a user, returning the generated ID.
    pub async fn create(
        pool: &PgPool,
        email: &str,
        display_name: &str,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO users (email, display_name) \
             VALUES ($1, $2) \
             RETURNING id",
        )
        .bind(email)
        .bind(display_name)
        .fetch_one(pool)
        .await
    }

    /// Fetch a user by ID.
    pub async fn get(pool: &PgPool, user_id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
