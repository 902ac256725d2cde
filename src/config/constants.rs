//! Configuration constants.
//!
//! Defaults for storage and server locations plus the fixed strings the HTTP
//! surface returns.

/// Default SQLite database location, relative to the working directory.
pub const DB_PATH: &str = "./demo.db";

/// Default directory for per-request export files.
pub const EXPORT_DIR: &str = ".";

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 5000;

/// File name stem used for exported files (`users.csv`, `users.json`, `users.pdf`).
pub const EXPORT_FILE_STEM: &str = "users";

/// Body returned with `400 Bad Request` for an unknown export format.
pub const INVALID_FILE_TYPE_MESSAGE: &str = "Invalid file type.";

/// Title line rendered at the top of the PDF report.
pub const PDF_REPORT_TITLE: &str = "User Report";
