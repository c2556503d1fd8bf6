use crate::error::{StorageError, StorageResult};
use crate::models::{Contact, NewContact};
use crate::stores::traits::ContactStore;
use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use sqlx::FromRow;
use tracing::debug;

/// Contact store backed by the `contact` table.
pub struct SqlContactStore {
    pool: SqlitePool,
}

impl SqlContactStore {
    /// Create a new SqlContactStore over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContactRow {
    id: i64,
    first_name: String,
    last_name: String,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        NewContact::new(row.first_name, row.last_name).into_contact(row.id)
    }
}

#[async_trait]
impl ContactStore for SqlContactStore {
    async fn find_all(&self) -> StorageResult<Vec<Contact>> {
        let stmt = "SELECT id, first_name, last_name FROM contact ORDER BY id";
        debug!(stmt, "Executing find_all");

        let rows = sqlx::query_as::<_, ContactRow>(stmt)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::database("find_all"))?;

        Ok(rows.into_iter().map(Contact::from).collect())
    }

    async fn create(&self, contact: NewContact) -> StorageResult<Contact> {
        let stmt = "INSERT INTO contact (first_name, last_name) VALUES (?, ?)";
        debug!(stmt, "Executing create");

        let result = sqlx::query(stmt)
            .bind(&contact.first_name)
            .bind(&contact.last_name)
            .execute(&self.pool)
            .await
            .map_err(StorageError::database("create"))?;

        Ok(contact.into_contact(result.last_insert_rowid()))
    }

    async fn delete_by_id(&self, id: i64) -> StorageResult<()> {
        let stmt = "DELETE FROM contact WHERE id = ?";
        debug!(stmt, id, "Executing delete_by_id");

        let result = sqlx::query(stmt)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::database("delete_by_id"))?;

        // Zero affected rows is not an error.
        debug!(id, rows_affected = result.rows_affected(), "Contact delete finished");
        Ok(())
    }
}
