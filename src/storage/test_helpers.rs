//! Shared test helpers for storage module tests.
//!
//! This module provides common utilities for database setup and test data creation
//! used across storage module tests.

#[cfg(test)]
use tempfile::TempDir;

#[cfg(test)]
use crate::storage::connection::{close_connection, open_connection};
#[cfg(test)]
use crate::storage::UserStore;

/// Creates an initialized store backed by a file in a fresh temporary directory.
/// The directory is removed when the returned `TempDir` is dropped.
#[cfg(test)]
pub async fn create_test_store() -> (TempDir, UserStore) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let store = UserStore::new(dir.path().join("test_users.db"));
    store
        .initialize()
        .await
        .expect("Failed to initialize test store");
    (dir, store)
}

/// Inserts a row directly, bypassing the store API.
/// Allows tests to write values the store itself never produces, such as NULLs.
#[cfg(test)]
pub async fn insert_raw_user(store: &UserStore, name: Option<&str>, email: Option<&str>) {
    let mut conn = open_connection(store.db_path())
        .await
        .expect("Failed to open test connection");
    sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
        .bind(name)
        .bind(email)
        .execute(&mut conn)
        .await
        .expect("Failed to insert raw user");
    close_connection(conn).await;
}
