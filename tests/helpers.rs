// Shared test helpers for spinning up the web server against a temporary database.
//
// This module provides common utilities used across multiple test files to reduce duplication.

#![allow(dead_code)] // Each test file uses a different subset

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use user_export::{serve, AppState, UserStore};

/// A running server bound to an ephemeral port on localhost.
/// Shut down and cleaned up when dropped.
pub struct TestServer {
    pub base_url: String,
    pub store: UserStore,
    pub export_dir: PathBuf,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<Result<(), anyhow::Error>>>,
    // Kept last so the directory outlives the server.
    _dir: TempDir,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Stops the server and waits for it to exit.
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle
                .await
                .expect("server task panicked")
                .expect("server returned an error");
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Starts a server with a fresh, initialized store and an empty export directory.
pub async fn spawn_test_server() -> TestServer {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let export_dir = dir.path().join("exports");
    std::fs::create_dir_all(&export_dir).expect("Failed to create export directory");

    let store = UserStore::new(dir.path().join("users.db"));
    store
        .initialize()
        .await
        .expect("Failed to initialize test store");

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener address");

    let (tx, rx) = oneshot::channel::<()>();
    let state = AppState::new(store.clone(), export_dir.clone());
    let handle = tokio::spawn(serve(listener, state, async {
        let _ = rx.await;
    }));

    TestServer {
        base_url: format!("http://{}", addr),
        store,
        export_dir,
        shutdown: Some(tx),
        handle: Some(handle),
        _dir: dir,
    }
}

/// HTTP client that does not follow redirects, so tests can assert on them.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build HTTP client")
}

/// Lists the entries of a directory by file name.
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("readable directory")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
