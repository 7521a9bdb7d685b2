// storage/migrations.rs
// Database migration management

use sqlx::migrate::Migrator;
use sqlx::{Pool, Sqlite};

/// Migrations under `migrations/`, embedded into the binary at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Applies the embedded migrations.
///
/// Creates the `urls` table when it does not exist yet; safe to call on every start.
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<(), anyhow::Error> {
    MIGRATOR.run(pool).await?;
    Ok(())
}
