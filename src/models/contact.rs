//! Contact model: the aggregate of a base record, its emails and its phones.

use super::{Email, NewPhone, Phone};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A contact in the directory.
///
/// Stores return contacts with empty `emails`/`phones`; the aggregation
/// service attaches the child rows. Both collections are always serialized,
/// even when empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Contact {
    /// Store-assigned identifier (0 until persisted)
    #[serde(default, skip_serializing_if = "super::is_unpersisted")]
    pub id: i64,

    pub first_name: String,

    pub last_name: String,

    /// Email addresses, in store order
    #[serde(default)]
    pub emails: Vec<Email>,

    /// Phone numbers, in store order
    #[serde(default)]
    pub phones: Vec<Phone>,
}

impl Contact {
    /// Create an unpersisted contact with no emails or phones.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            emails: Vec::new(),
            phones: Vec::new(),
        }
    }

    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Base fields for inserting a contact record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
}

impl NewContact {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// The persisted form of this record under the given id.
    pub fn into_contact(self, id: i64) -> Contact {
        Contact {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            emails: Vec::new(),
            phones: Vec::new(),
        }
    }
}

/// Everything needed to create a contact together with its children.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CreateContactData {
    pub first_name: String,
    pub last_name: String,

    #[serde(default)]
    pub emails: Vec<String>,

    #[serde(default)]
    pub phones: Vec<NewPhone>,
}

impl CreateContactData {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            emails: Vec::new(),
            phones: Vec::new(),
        }
    }

    pub fn with_emails<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.emails = emails.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_phones(mut self, phones: Vec<NewPhone>) -> Self {
        self.phones = phones;
        self
    }

    /// Check the required fields.
    ///
    /// Only names are required. Email addresses and phone numbers are free-form.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(ValidationError::Required("first_name"));
        }
        if self.last_name.trim().is_empty() {
            return Err(ValidationError::Required("last_name"));
        }
        Ok(())
    }

    /// Split into the base record and the child inputs.
    pub fn into_parts(self) -> (NewContact, Vec<String>, Vec<NewPhone>) {
        (
            NewContact {
                first_name: self.first_name,
                last_name: self.last_name,
            },
            self.emails,
            self.phones,
        )
    }
}
