//! Web server HTTP handlers.

mod export;
mod index;
mod users;

pub use export::export_handler;
pub use index::index_handler;
pub use users::add_user_handler;
