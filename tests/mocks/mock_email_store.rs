use super::CallTracker;
use async_trait::async_trait;
use contacts_directory::error::{StorageError, StorageResult};
use contacts_directory::models::Email;
use contacts_directory::stores::EmailStore;
use std::sync::{Arc, Mutex};

/// Mock email store for testing.
///
/// Inserts are applied one at a time, so a failure configured with
/// [`MockEmailStore::fail_on_insert`] leaves the earlier rows in place.
#[derive(Clone, Default)]
pub struct MockEmailStore {
    emails: Arc<Mutex<Vec<Email>>>,
    inserts: Arc<Mutex<usize>>,
    fail_on_insert: Arc<Mutex<Option<usize>>>,
    fail_lookups_for: Arc<Mutex<Option<i64>>>,
    calls: CallTracker,
}

impl MockEmailStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a persisted email directly.
    pub fn add_email(&self, id: i64, contact_id: i64, address: &str) -> Email {
        let email = Email {
            id,
            contact_id,
            address: address.to_string(),
        };
        self.emails.lock().unwrap().push(email.clone());
        email
    }

    /// Fail the `n`th insert (1-based) counted across all `create` calls.
    pub fn fail_on_insert(&self, n: usize) {
        *self.fail_on_insert.lock().unwrap() = Some(n);
    }

    /// Fail `find_by_contact_id` for one contact.
    pub fn fail_lookups_for(&self, contact_id: i64) {
        *self.fail_lookups_for.lock().unwrap() = Some(contact_id);
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        self.calls.count(method)
    }

    pub fn all(&self) -> Vec<Email> {
        self.emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailStore for MockEmailStore {
    async fn find_by_contact_id(&self, contact_id: i64) -> StorageResult<Vec<Email>> {
        self.calls.track("find_by_contact_id");
        if *self.fail_lookups_for.lock().unwrap() == Some(contact_id) {
            return Err(StorageError::backend("find_by_contact_id", "injected failure"));
        }

        Ok(self
            .emails
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.contact_id == contact_id)
            .cloned()
            .collect())
    }

    async fn create(&self, contact_id: i64, addresses: Vec<String>) -> StorageResult<Vec<Email>> {
        self.calls.track("create");
        let mut inserted = Vec::new();

        for address in addresses {
            let n = {
                let mut inserts = self.inserts.lock().unwrap();
                *inserts += 1;
                *inserts
            };
            if *self.fail_on_insert.lock().unwrap() == Some(n) {
                return Err(StorageError::backend("create", format!("insert {} rejected", n)));
            }

            let mut emails = self.emails.lock().unwrap();
            let id = emails.iter().map(|e| e.id).max().unwrap_or(0) + 1;
            let email = Email {
                id,
                contact_id,
                address,
            };
            emails.push(email.clone());
            inserted.push(email);
        }

        Ok(inserted)
    }
}
