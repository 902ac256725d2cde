//! Application initialization.
//!
//! Sets up process-wide facilities before any request is served. Store and
//! server setup live with their own modules; this module only owns logging.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
