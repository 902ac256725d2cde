//! Per-call SQLite connection management.
//!
//! Every store operation opens its own connection and closes it before
//! returning, so no handle outlives a request. Connections are opened with:
//! - WAL mode enabled for concurrent access
//! - No implicit file creation (only `initialize` creates the database file)

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::{ConnectOptions, Connection, SqliteConnection};

use crate::error_handling::StorageError;

/// Creates the database file (and its parent directory) if it doesn't exist.
pub(crate) fn ensure_database_file(db_path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                error!("Failed to create database directory {}: {e}", parent.display());
                StorageError::DirectoryCreationError(e.to_string())
            })?;
        }
    }

    match OpenOptions::new()
        .read(true)
        .write(true)
        .create_new(true)
        .open(db_path)
    {
        Ok(_) => info!("Database file created at {}", db_path.display()),
        Err(ref e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("Database file already exists at {}", db_path.display())
        }
        Err(e) => {
            error!("Failed to create database file: {e}");
            return Err(StorageError::ConnectionError(sqlx::Error::Io(e)));
        }
    }

    Ok(())
}

/// Opens a fresh connection to the database at `db_path`.
///
/// The database file must already exist; a missing file is reported as a
/// [`StorageError::ConnectionError`] instead of silently creating an empty
/// database.
pub(crate) async fn open_connection(db_path: &Path) -> Result<SqliteConnection, StorageError> {
    SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(false)
        .journal_mode(SqliteJournalMode::Wal)
        .connect()
        .await
        .map_err(|e| {
            error!("Failed to connect to database {}: {e}", db_path.display());
            StorageError::ConnectionError(e)
        })
}

/// Closes a connection, logging instead of failing if the close handshake
/// errors. The connection is released either way.
pub(crate) async fn close_connection(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        warn!("Error while closing database connection: {e}");
    }
}
