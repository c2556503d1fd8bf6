use crate::error::{StorageError, StorageResult};
use crate::models::Email;
use crate::stores::traits::EmailStore;
use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use tracing::debug;

/// Email store backed by the `email` table.
pub struct SqlEmailStore {
    pool: SqlitePool,
}

impl SqlEmailStore {
    /// Create a new SqlEmailStore over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn create_single_email(&self, contact_id: i64, address: String) -> StorageResult<Email> {
        let stmt = "INSERT INTO email (contact_id, address) VALUES (?, ?)";
        debug!(stmt, contact_id, "Executing create_single_email");

        let result = sqlx::query(stmt)
            .bind(contact_id)
            .bind(&address)
            .execute(&self.pool)
            .await
            .map_err(StorageError::database("create"))?;

        Ok(Email {
            id: result.last_insert_rowid(),
            ..Email::new(contact_id, address)
        })
    }
}

#[async_trait]
impl EmailStore for SqlEmailStore {
    async fn find_by_contact_id(&self, contact_id: i64) -> StorageResult<Vec<Email>> {
        let stmt = "SELECT id, contact_id, address FROM email WHERE contact_id = ? ORDER BY id";
        debug!(stmt, contact_id, "Executing find_by_contact_id");

        sqlx::query_as::<_, Email>(stmt)
            .bind(contact_id)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::database("find_by_contact_id"))
    }

    async fn create(&self, contact_id: i64, addresses: Vec<String>) -> StorageResult<Vec<Email>> {
        let mut inserted = Vec::with_capacity(addresses.len());

        // One statement per row, no transaction: earlier rows survive a later failure.
        for address in addresses {
            match self.create_single_email(contact_id, address).await {
                Ok(email) => inserted.push(email),
                Err(e) => {
                    debug!(contact_id, inserted = inserted.len(), "Email batch stopped");
                    return Err(e);
                }
            }
        }

        Ok(inserted)
    }
}
