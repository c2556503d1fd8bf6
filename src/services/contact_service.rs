//! Contact aggregation service.
//!
//! Assembles [`Contact`] aggregates from the contact, email and phone stores
//! and orders multi-table writes when a contact is created. This is the only
//! place that joins the three entities.
//!
//! Writes are not atomic: when a child insert fails, the base contact row and
//! any children inserted before the failure stay persisted, and the caller
//! receives an [`AggregationError`] naming the failed step.

use crate::error::{AggregationError, AggregationResult, AggregationStep};
use crate::models::{Contact, CreateContactData};
use crate::stores::{ContactStore, EmailStore, PhoneStore};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Fetch every contact with its emails and phones attached.
    ///
    /// Fails as a whole if any child lookup fails; no partial list is returned.
    async fn find_all_contacts(&self) -> AggregationResult<Vec<Contact>>;

    /// Create a contact, then its emails, then its phones.
    async fn create(&self, data: CreateContactData) -> AggregationResult<Contact>;

    /// Delete the base contact record.
    ///
    /// Emails and phones of the contact are left in place.
    async fn delete_contact_by_id(&self, id: i64) -> AggregationResult<()>;
}

/// Default implementation of ContactService over three stores.
pub struct ContactAggregationService {
    contacts: Arc<dyn ContactStore>,
    emails: Arc<dyn EmailStore>,
    phones: Arc<dyn PhoneStore>,
}

impl ContactAggregationService {
    /// Create a new aggregation service.
    pub fn new(
        contacts: Arc<dyn ContactStore>,
        emails: Arc<dyn EmailStore>,
        phones: Arc<dyn PhoneStore>,
    ) -> Self {
        Self {
            contacts,
            emails,
            phones,
        }
    }

    fn fail(
        step: AggregationStep,
        contact_id: Option<i64>,
        source: crate::error::StorageError,
    ) -> AggregationError {
        let err = AggregationError::new(step, contact_id, source);
        error!("{}", err);
        err
    }

    /// Attach emails and phones to one contact.
    async fn hydrate(&self, contact: &mut Contact) -> AggregationResult<()> {
        contact.emails = self
            .emails
            .find_by_contact_id(contact.id)
            .await
            .map_err(|e| Self::fail(AggregationStep::FetchEmails, Some(contact.id), e))?;

        contact.phones = self
            .phones
            .find_by_contact_id(contact.id)
            .await
            .map_err(|e| Self::fail(AggregationStep::FetchPhones, Some(contact.id), e))?;

        Ok(())
    }
}

#[async_trait]
impl ContactService for ContactAggregationService {
    async fn find_all_contacts(&self) -> AggregationResult<Vec<Contact>> {
        let mut contacts = self
            .contacts
            .find_all()
            .await
            .map_err(|e| Self::fail(AggregationStep::ListContacts, None, e))?;

        // Sequential fan-out: one email and one phone lookup per contact.
        for contact in contacts.iter_mut() {
            self.hydrate(contact).await?;
        }

        debug!(count = contacts.len(), "Hydrated contacts");
        Ok(contacts)
    }

    async fn create(&self, data: CreateContactData) -> AggregationResult<Contact> {
        let (base, emails, phones) = data.into_parts();

        let mut contact = self
            .contacts
            .create(base)
            .await
            .map_err(|e| Self::fail(AggregationStep::CreateContact, None, e))?;

        if !emails.is_empty() {
            contact.emails = self
                .emails
                .create(contact.id, emails)
                .await
                .map_err(|e| Self::fail(AggregationStep::CreateEmails, Some(contact.id), e))?;
        }

        if !phones.is_empty() {
            contact.phones = self
                .phones
                .create(contact.id, phones)
                .await
                .map_err(|e| Self::fail(AggregationStep::CreatePhones, Some(contact.id), e))?;
        }

        debug!(
            contact_id = contact.id,
            emails = contact.emails.len(),
            phones = contact.phones.len(),
            "Created contact"
        );
        Ok(contact)
    }

    async fn delete_contact_by_id(&self, id: i64) -> AggregationResult<()> {
        self.contacts
            .delete_by_id(id)
            .await
            .map_err(|e| Self::fail(AggregationStep::DeleteContact, Some(id), e))
    }
}
