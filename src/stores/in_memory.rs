//! In-memory store implementations.
//!
//! Used when the server runs with `CONTACTS_STORE=memory` and as the default
//! substitute in tests. Ids are assigned from a per-store counter starting at 1
//! and are never reused, matching the SQL tables.

use crate::error::{StorageError, StorageResult};
use crate::models::{Contact, Email, NewContact, NewPhone, Phone};
use crate::stores::traits::{ContactStore, EmailStore, PhoneStore};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

fn lock<'a, T>(mutex: &'a Mutex<T>, operation: &'static str) -> StorageResult<MutexGuard<'a, T>> {
    mutex
        .lock()
        .map_err(|_| StorageError::backend(operation, "store lock poisoned"))
}

#[derive(Debug, Default)]
struct Table<T> {
    last_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// Contact store holding records in a `BTreeMap` keyed by id.
#[derive(Debug, Default)]
pub struct InMemoryContactStore {
    table: Mutex<Table<Contact>>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    async fn find_all(&self) -> StorageResult<Vec<Contact>> {
        let table = lock(&self.table, "find_all")?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn create(&self, contact: NewContact) -> StorageResult<Contact> {
        let mut table = lock(&self.table, "create")?;
        let id = table.next_id();
        let contact = contact.into_contact(id);
        table.rows.insert(id, contact.clone());
        Ok(contact)
    }

    async fn delete_by_id(&self, id: i64) -> StorageResult<()> {
        let mut table = lock(&self.table, "delete_by_id")?;
        table.rows.remove(&id);
        Ok(())
    }
}

/// Email store holding rows in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryEmailStore {
    table: Mutex<Table<Email>>,
}

impl InMemoryEmailStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmailStore for InMemoryEmailStore {
    async fn find_by_contact_id(&self, contact_id: i64) -> StorageResult<Vec<Email>> {
        let table = lock(&self.table, "find_by_contact_id")?;
        Ok(table
            .rows
            .values()
            .filter(|email| email.contact_id == contact_id)
            .cloned()
            .collect())
    }

    async fn create(&self, contact_id: i64, addresses: Vec<String>) -> StorageResult<Vec<Email>> {
        let mut inserted = Vec::with_capacity(addresses.len());
        for address in addresses {
            let mut table = lock(&self.table, "create")?;
            let email = Email {
                id: table.next_id(),
                ..Email::new(contact_id, address)
            };
            table.rows.insert(email.id, email.clone());
            inserted.push(email);
        }
        Ok(inserted)
    }
}

/// Phone store holding rows in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryPhoneStore {
    table: Mutex<Table<Phone>>,
}

impl InMemoryPhoneStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PhoneStore for InMemoryPhoneStore {
    async fn find_by_contact_id(&self, contact_id: i64) -> StorageResult<Vec<Phone>> {
        let table = lock(&self.table, "find_by_contact_id")?;
        Ok(table
            .rows
            .values()
            .filter(|phone| phone.contact_id == contact_id)
            .cloned()
            .collect())
    }

    async fn create(&self, contact_id: i64, phones: Vec<NewPhone>) -> StorageResult<Vec<Phone>> {
        let mut inserted = Vec::with_capacity(phones.len());
        for phone in phones {
            let mut table = lock(&self.table, "create")?;
            let id = table.next_id();
            let phone = phone.into_phone(id, contact_id);
            table.rows.insert(id, phone.clone());
            inserted.push(phone);
        }
        Ok(inserted)
    }
}
