//! Process-level helpers used by the entry points.

pub mod shutdown;

// Re-export public API
pub use shutdown::shutdown_signal;
