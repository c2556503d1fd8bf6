use super::CallTracker;
use async_trait::async_trait;
use contacts_directory::error::{StorageError, StorageResult};
use contacts_directory::models::{NewPhone, Phone};
use contacts_directory::stores::PhoneStore;
use std::sync::{Arc, Mutex};

/// Mock phone store for testing, mirroring [`super::MockEmailStore`].
#[derive(Clone, Default)]
pub struct MockPhoneStore {
    phones: Arc<Mutex<Vec<Phone>>>,
    inserts: Arc<Mutex<usize>>,
    fail_on_insert: Arc<Mutex<Option<usize>>>,
    fail_lookups_for: Arc<Mutex<Option<i64>>>,
    calls: CallTracker,
}

impl MockPhoneStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a persisted phone directly.
    pub fn add_phone(&self, id: i64, contact_id: i64, number: &str, phone_type: &str) -> Phone {
        let phone = NewPhone::new(number, phone_type).into_phone(id, contact_id);
        self.phones.lock().unwrap().push(phone.clone());
        phone
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

    pub fn all(&self) -> Vec<Phone> {
        self.phones.lock().unwrap().clone()
    }
}

#[async_trait]
impl PhoneStore for MockPhoneStore {
    async fn find_by_contact_id(&self, contact_id: i64) -> StorageResult<Vec<Phone>> {
        self.calls.track("find_by_contact_id");
        if *self.fail_lookups_for.lock().unwrap() == Some(contact_id) {
            return Err(StorageError::backend("find_by_contact_id", "injected failure"));
        }

        Ok(self
            .phones
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.contact_id == contact_id)
            .cloned()
            .collect())
    }

    async fn create(&self, contact_id: i64, phones: Vec<NewPhone>) -> StorageResult<Vec<Phone>> {
        self.calls.track("create");
        let mut inserted = Vec::new();

        for phone in phones {
            let n = {
                let mut inserts = self.inserts.lock().unwrap();
                *inserts += 1;
                *inserts
            };
            if *self.fail_on_insert.lock().unwrap() == Some(n) {
                return Err(StorageError::backend("create", format!("insert {} rejected", n)));
            }

            let mut stored = self.phones.lock().unwrap();
            let id = stored.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            let phone = phone.into_phone(id, contact_id);
            stored.push(phone.clone());
            inserted.push(phone);
        }

        Ok(inserted)
    }
}
