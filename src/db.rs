//! SQLite connection pool setup.
//!
//! Builds the pool the SQL stores share and creates the three tables on first
//! run. Table creation is idempotent; there is no versioned migration.

use crate::config::Config;
use crate::error::{StorageError, StorageResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{debug, info};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS contact (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS email (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    contact_id INTEGER NOT NULL,
    address TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_email_contact_id ON email(contact_id);

CREATE TABLE IF NOT EXISTS phone (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    contact_id INTEGER NOT NULL,
    type TEXT NOT NULL,
    number TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_phone_contact_id ON phone(contact_id);
"#;

/// Whether the URL names an in-memory SQLite database.
fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Open a connection pool for the configured database.
///
/// In-memory databases live only as long as their connection, so they get a
/// single connection that is never recycled.
pub async fn connect(config: &Config) -> StorageResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(StorageError::database("connect"))?
        .create_if_missing(true);

    let pool_options = if is_memory_url(&config.database_url) {
        debug!("Using a single pinned connection for in-memory SQLite");
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(StorageError::database("connect"))?;

    info!(
        max_connections = pool.options().get_max_connections(),
        "Opened SQLite pool"
    );
    Ok(pool)
}

/// Create the `contact`, `email` and `phone` tables if they do not exist.
///
/// `email.contact_id` and `phone.contact_id` deliberately carry no foreign key.
pub async fn ensure_schema(pool: &SqlitePool) -> StorageResult<()> {
    sqlx::query(SCHEMA)
        .execute(pool)
        .await
        .map_err(StorageError::database("ensure_schema"))?;
    Ok(())
}

/// Fresh in-memory database with the schema applied.
pub async fn in_memory() -> StorageResult<SqlitePool> {
    let pool = connect(&Config::default()).await?;
    ensure_schema(&pool).await?;
    Ok(pool)
}
