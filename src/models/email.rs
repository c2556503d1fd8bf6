//! Email model.

use serde::{Deserialize, Serialize};

/// An email address owned by a contact.
///
/// The address is free-form; it is not validated beyond what the caller does.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, sqlx::FromRow)]
pub struct Email {
    /// Store-assigned identifier (0 until persisted)
    #[serde(default, skip_serializing_if = "super::is_unpersisted")]
    pub id: i64,

    /// Owning contact
    pub contact_id: i64,

    /// The email address
    pub address: String,
}

impl Email {
    /// Create an unpersisted email for the given contact.
    pub fn new(contact_id: i64, address: impl Into<String>) -> Self {
        Self {
            id: 0,
            contact_id,
            address: address.into(),
        }
    }
}
