// storage/mod.rs
// Database operations module

pub mod migrations;
pub mod models;
pub mod pool;
#[cfg(test)]
pub mod test_helpers;
pub mod urls;

// Re-export commonly used items
pub use migrations::run_migrations;
pub use models::UrlRecord;
pub use pool::init_db_pool;
pub use urls::{clear_all, find_url, insert_url};
