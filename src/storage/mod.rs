// storage/mod.rs
// User record persistence

mod connection;
mod models;
mod users;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export commonly used items
pub use models::UserRecord;
pub use users::UserStore;
