use crate::error::{StorageError, StorageResult};
use crate::models::{NewPhone, Phone, PhoneType};
use crate::stores::traits::PhoneStore;
use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use sqlx::FromRow;
use tracing::debug;

/// Phone store backed by the `phone` table.
pub struct SqlPhoneStore {
    pool: SqlitePool,
}

impl SqlPhoneStore {
    /// Create a new SqlPhoneStore over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn create_single_phone(&self, contact_id: i64, phone: NewPhone) -> StorageResult<Phone> {
        let stmt = "INSERT INTO phone (contact_id, type, number) VALUES (?, ?, ?)";
        debug!(stmt, contact_id, "Executing create_single_phone");

        let result = sqlx::query(stmt)
            .bind(contact_id)
            .bind(phone.phone_type.as_str())
            .bind(&phone.number)
            .execute(&self.pool)
            .await
            .map_err(StorageError::database("create"))?;

        Ok(phone.into_phone(result.last_insert_rowid(), contact_id))
    }
}

#[derive(Debug, FromRow)]
struct PhoneRow {
    id: i64,
    contact_id: i64,
    number: String,
    #[sqlx(rename = "type")]
    phone_type: String,
}

impl From<PhoneRow> for Phone {
    fn from(row: PhoneRow) -> Self {
        Phone {
            id: row.id,
            contact_id: row.contact_id,
            number: row.number,
            phone_type: PhoneType::from(row.phone_type),
        }
    }
}

#[async_trait]
impl PhoneStore for SqlPhoneStore {
    async fn find_by_contact_id(&self, contact_id: i64) -> StorageResult<Vec<Phone>> {
        let stmt =
            "SELECT id, contact_id, number, type FROM phone WHERE contact_id = ? ORDER BY id";
        debug!(stmt, contact_id, "Executing find_by_contact_id");

        let rows = sqlx::query_as::<_, PhoneRow>(stmt)
            .bind(contact_id)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::database("find_by_contact_id"))?;

        Ok(rows.into_iter().map(Phone::from).collect())
    }

    async fn create(&self, contact_id: i64, phones: Vec<NewPhone>) -> StorageResult<Vec<Phone>> {
        let mut inserted = Vec::with_capacity(phones.len());

        for phone in phones {
            match self.create_single_phone(contact_id, phone).await {
                Ok(phone) => inserted.push(phone),
                Err(e) => {
                    debug!(contact_id, inserted = inserted.len(), "Phone batch stopped");
                    return Err(e);
                }
            }
        }

        Ok(inserted)
    }
}
