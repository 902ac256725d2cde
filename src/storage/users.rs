// storage/users.rs
// User record store

use std::path::{Path, PathBuf};

use futures::TryStreamExt;
use log::{debug, error, info};

use crate::config::Config;
use crate::error_handling::StorageError;

use super::connection::{close_connection, ensure_database_file, open_connection};
use super::models::UserRecord;

const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    email TEXT
)";

const INSERT_USER: &str = "INSERT INTO users (name, email) VALUES (?, ?)";

const SELECT_USERS: &str = "SELECT id, name, email FROM users ORDER BY id ASC";

/// Durable storage for [`UserRecord`]s backed by a single SQLite file.
///
/// The store holds only the database path. Each operation opens a connection,
/// runs one statement and closes the connection again, so every call observes
/// the latest committed state and no handle is shared between requests.
#[derive(Debug, Clone)]
pub struct UserStore {
    db_path: PathBuf,
}

impl UserStore {
    /// Creates a store for the database at `db_path`. Nothing is opened until
    /// the first operation.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Creates a store from the configured database path.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.db_path.clone())
    }

    /// Path of the underlying SQLite file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Ensures the database file and the `users` table exist.
    ///
    /// Safe to call on every startup: the file and table are created only when
    /// absent.
    pub async fn initialize(&self) -> Result<(), StorageError> {
        ensure_database_file(&self.db_path)?;

        let mut conn = open_connection(&self.db_path).await?;
        let outcome = sqlx::query(CREATE_USERS_TABLE).execute(&mut conn).await;
        close_connection(conn).await;

        outcome.map_err(|e| {
            error!("Failed to create users table: {e}");
            StorageError::SqlError(e)
        })?;

        info!("User store ready at {}", self.db_path.display());
        Ok(())
    }

    /// Appends a user and returns the id SQLite assigned to it.
    ///
    /// Name and email are stored as given; empty strings are accepted.
    pub async fn add_user(&self, name: &str, email: &str) -> Result<i64, StorageError> {
        let mut conn = open_connection(&self.db_path).await?;
        let outcome = sqlx::query(INSERT_USER)
            .bind(name)
            .bind(email)
            .execute(&mut conn)
            .await;
        close_connection(conn).await;

        match outcome {
            Ok(result) => {
                let id = result.last_insert_rowid();
                debug!("Inserted user {id}");
                Ok(id)
            }
            Err(e) => {
                error!("Error when inserting user: {e}");
                Err(StorageError::SqlError(e))
            }
        }
    }

    /// Returns every stored user in ascending id order (insertion order).
    pub async fn get_users(&self) -> Result<Vec<UserRecord>, StorageError> {
        let mut conn = open_connection(&self.db_path).await?;
        let outcome = async {
            let mut rows = sqlx::query(SELECT_USERS).fetch(&mut conn);
            let mut users = Vec::new();
            while let Some(row) = rows.try_next().await? {
                users.push(UserRecord::from_row(&row)?);
            }
            Ok::<_, sqlx::Error>(users)
        }
        .await;
        close_connection(conn).await;

        outcome.map_err(|e| {
            error!("Error when reading users: {e}");
            StorageError::SqlError(e)
        })
    }
}
