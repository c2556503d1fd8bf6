//! Data models for the contacts directory.
//!
//! A [`Contact`] is an aggregate: the base record plus the [`Email`] and
//! [`Phone`] rows that reference it. Each entity is persisted in its own table
//! and assembled by the aggregation service.

pub mod contact;
pub mod email;
pub mod phone;

pub use contact::{Contact, CreateContactData, NewContact};
pub use email::Email;
pub use phone::{NewPhone, Phone, PhoneType};

/// Serde helper: store-assigned ids of zero mean "not yet persisted" and are omitted.
pub(crate) fn is_unpersisted(id: &i64) -> bool {
    *id == 0
}
