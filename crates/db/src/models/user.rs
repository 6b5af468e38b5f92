//! User entity model.
//!
//! Users are an identity anchor for foreign keys; authentication itself is
//! handled by the external identity provider.

use serde::Serialize;
use sqlx::FromRow;
use tablematch_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub display_name: String,
    pub created_at: Timestamp,
}
