//! Tests for exporting stored users to files through the library API.

use std::path::PathBuf;

use tempfile::TempDir;
use user_export::{export, export_users, Config, ExportError, ExportFormat, UserRecord, UserStore};

#[path = "helpers.rs"]
mod helpers;

use helpers::dir_entries;

fn config_for(dir: &TempDir) -> Config {
    Config {
        db_path: dir.path().join("users.db"),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_export_users_csv() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let config = config_for(&dir);

    let store = UserStore::from_config(&config);
    store.initialize().await.expect("initialize");
    store.add_user("Ann", "a@x.com").await.expect("insert");
    store.add_user("Doe, Jane", "jane@x.com").await.expect("insert");

    let output = dir.path().join("out.csv");
    let count = export_users(&config, ExportFormat::Csv, &output)
        .await
        .expect("Export should succeed");
    assert_eq!(count, 2);

    let content = std::fs::read_to_string(&output).expect("Should read CSV file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec!["ID,Name,Email", "1,Ann,a@x.com", "2,\"Doe, Jane\",jane@x.com"]
    );
}

#[tokio::test]
async fn test_export_users_initializes_missing_database() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let config = config_for(&dir);
    let output = dir.path().join("out.json");

    let count = export_users(&config, ExportFormat::Json, &output)
        .await
        .expect("Export should succeed on a fresh database");

    assert_eq!(count, 0);
    assert_eq!(std::fs::read_to_string(&output).expect("json file"), "[]");
    assert!(config.db_path.exists());
}

#[tokio::test]
async fn test_export_users_failure_leaves_no_output() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let config = config_for(&dir);
    let output: PathBuf = dir.path().join("no_such_dir").join("out.pdf");

    let err = export_users(&config, ExportFormat::Pdf, &output)
        .await
        .expect_err("writing into a missing directory should fail");
    assert!(format!("{:#}", err).contains("Failed to export users"));
    assert!(!output.exists());
}

#[test]
fn test_export_round_trip_every_format() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let records = vec![UserRecord::new(1, "Ann", "a@x.com")];

    for format in [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Pdf] {
        let path = dir.path().join(format.file_name());
        export(&records, &path, format).expect("export");
        assert!(path.metadata().expect("metadata").len() > 0);
    }

    let json = std::fs::read_to_string(dir.path().join("users.json")).expect("json file");
    let parsed: Vec<UserRecord> = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(parsed, records);

    assert_eq!(
        dir_entries(dir.path()),
        vec!["users.csv", "users.json", "users.pdf"]
    );
}

#[test]
fn test_unknown_format_name_is_rejected() {
    let err = "xml".parse::<ExportFormat>().expect_err("xml is not supported");
    assert!(matches!(err, ExportError::UnsupportedFormat(_)));
    assert_eq!(err.to_string(), "Invalid file type.");
}
