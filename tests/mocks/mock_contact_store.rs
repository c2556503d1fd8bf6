use super::CallTracker;
use async_trait::async_trait;
use contacts_directory::error::{StorageError, StorageResult};
use contacts_directory::models::{Contact, NewContact};
use contacts_directory::stores::ContactStore;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Keeps contacts in memory, counts calls per method and can be told to fail
/// a given method.
#[derive(Clone, Default)]
pub struct MockContactStore {
    contacts: Arc<Mutex<BTreeMap<i64, Contact>>>,
    last_id: Arc<Mutex<i64>>,
    failing: Arc<Mutex<HashSet<&'static str>>>,
    calls: CallTracker,
}

impl MockContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a persisted contact directly, bypassing `create`.
    pub fn add_contact(&self, id: i64, first_name: &str, last_name: &str) -> Contact {
        let contact = NewContact::new(first_name, last_name).into_contact(id);
        self.contacts.lock().unwrap().insert(id, contact.clone());
        let mut last_id = self.last_id.lock().unwrap();
        *last_id = (*last_id).max(id);
        contact
    }

    /// Make every subsequent call to `method` fail.
    pub fn fail_on(&self, method: &'static str) {
        self.failing.lock().unwrap().insert(method);
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        self.calls.count(method)
    }

    pub fn reset_call_counts(&self) {
        self.calls.reset();
    }

    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    fn check(&self, method: &'static str) -> StorageResult<()> {
        self.calls.track(method);
        if self.failing.lock().unwrap().contains(method) {
            return Err(StorageError::backend(method, "injected failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl ContactStore for MockContactStore {
    async fn find_all(&self) -> StorageResult<Vec<Contact>> {
        self.check("find_all")?;
        Ok(self.contacts.lock().unwrap().values().cloned().collect())
    }

    async fn create(&self, contact: NewContact) -> StorageResult<Contact> {
        self.check("create")?;
        let id = {
            let mut last_id = self.last_id.lock().unwrap();
            *last_id += 1;
            *last_id
        };
        let contact = contact.into_contact(id);
        self.contacts.lock().unwrap().insert(id, contact.clone());
        Ok(contact)
    }

    async fn delete_by_id(&self, id: i64) -> StorageResult<()> {
        self.check("delete_by_id")?;
        self.contacts.lock().unwrap().remove(&id);
        Ok(())
    }
}
