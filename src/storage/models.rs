// storage/models.rs
// Database models and types

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

/// A stored user.
///
/// Maps to one row of the `users` table. The `id` is assigned by SQLite on
/// insertion and never supplied by callers. Serializes with keys in column
/// order (`id`, `name`, `email`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Store-assigned identifier, unique and increasing
    pub id: i64,
    /// Name as submitted
    pub name: String,
    /// Email as submitted (not validated)
    pub email: String,
}

impl UserRecord {
    /// Builds a record from its parts.
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Decodes a `SELECT id, name, email` row. `NULL` text columns become empty strings.
    pub(crate) fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get::<Option<String>, _>("name")?.unwrap_or_default(),
            email: row.try_get::<Option<String>, _>("email")?.unwrap_or_default(),
        })
    }
}
