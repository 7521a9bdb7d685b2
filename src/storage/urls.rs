//! URL record access.
//!
//! Insert, lookup by id, and bulk delete over the `urls` table. Every function
//! takes the pool explicitly; there is no global store handle.

use sqlx::{Row, SqlitePool};

use crate::error_handling::DatabaseError;
use crate::storage::models::UrlRecord;

/// Stores a new URL record.
///
/// # Errors
///
/// Returns `DatabaseError::DuplicateKey` if a record with the same id exists.
pub async fn insert_url(pool: &SqlitePool, id: i64, address: &str) -> Result<(), DatabaseError> {
    sqlx::query("INSERT INTO urls (id, address) VALUES (?, ?)")
        .bind(id)
        .bind(address)
        .execute(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                DatabaseError::DuplicateKey(id)
            }
            other => DatabaseError::SqlError(other),
        })?;

    Ok(())
}

/// Looks up a URL record by id.
///
/// Returns `Ok(None)` when no record has this id, so a miss is never confused
/// with a query failure.
pub async fn find_url(pool: &SqlitePool, id: i64) -> Result<Option<UrlRecord>, DatabaseError> {
    let row = sqlx::query("SELECT id, address FROM urls WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(Some(UrlRecord {
            id: row.try_get("id")?,
            address: row.try_get("address")?,
        })),
        None => Ok(None),
    }
}

/// Deletes every URL record, returning how many were removed.
///
/// Only used to isolate tests from each other.
pub async fn clear_all(pool: &SqlitePool) -> Result<u64, DatabaseError> {
    let result = sqlx::query("DELETE FROM urls").execute(pool).await?;
    Ok(result.rows_affected())
}
