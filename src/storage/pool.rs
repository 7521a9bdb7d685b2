//! Database connection pool management.
//!
//! This module initializes and configures the SQLite connection pool with:
//! - WAL mode enabled for concurrent access
//! - Automatic database file creation

use std::str::FromStr;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

/// Initializes and returns a database connection pool from a connection string.
///
/// Accepts any sqlx SQLite URL (`sqlite://forecast_api.db`, `sqlite::memory:`).
/// Creates the database file if it doesn't exist and enables WAL mode.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidConnectionString` for a malformed connection string and
/// `DatabaseError::SqlError` if the database cannot be opened.
pub async fn init_db_pool(connection_string: &str) -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::from_str(connection_string)
        .map_err(|e| {
            error!("Invalid connection string {connection_string:?}: {e}");
            DatabaseError::InvalidConnectionString(e.to_string())
        })?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePool::connect_with(options).await.map_err(|e| {
        error!("Failed to connect to database: {e}");
        DatabaseError::SqlError(e)
    })?;

    info!("Connected to database {}", connection_string);
    Ok(pool)
}
