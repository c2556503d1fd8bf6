use crate::error::StorageResult;
use crate::models::{Contact, Email, NewContact, NewPhone, Phone};
use async_trait::async_trait;

/// Store for base contact records.
///
/// Provides abstraction over contact persistence, enabling different
/// implementations (SQL, in-memory, test doubles). Contacts returned from a
/// store never have `emails` or `phones` populated.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Retrieve every contact record.
    ///
    /// Order is stable for a given store state but not sorted by any field.
    async fn find_all(&self) -> StorageResult<Vec<Contact>>;

    /// Insert a new contact and return it with its assigned id.
    async fn create(&self, contact: NewContact) -> StorageResult<Contact>;

    /// Delete the contact with the given id.
    ///
    /// Deleting an id that does not exist succeeds.
    async fn delete_by_id(&self, id: i64) -> StorageResult<()>;
}

/// Store for contact email addresses.
#[async_trait]
pub trait EmailStore: Send + Sync {
    /// Get the emails of a contact, empty when it has none.
    async fn find_by_contact_id(&self, contact_id: i64) -> StorageResult<Vec<Email>>;

    /// Insert one row per address, in order.
    ///
    /// Inserts run one at a time. If one fails, the error is returned and the
    /// rows inserted before it stay persisted.
    async fn create(&self, contact_id: i64, addresses: Vec<String>) -> StorageResult<Vec<Email>>;
}

/// Store for contact phone numbers.
#[async_trait]
pub trait PhoneStore: Send + Sync {
    /// Get the phones of a contact, empty when it has none.
    async fn find_by_contact_id(&self, contact_id: i64) -> StorageResult<Vec<Phone>>;

    /// Insert one row per entry, in order, with the same partial-write
    /// behavior as [`EmailStore::create`].
    async fn create(&self, contact_id: i64, phones: Vec<NewPhone>) -> StorageResult<Vec<Phone>>;
}
