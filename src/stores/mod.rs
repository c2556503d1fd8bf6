//! Stores for the three contact tables.
//!
//! Each store is a trait with a SQL implementation backed by a `SqlitePool`
//! and an in-memory implementation. The aggregation service only sees the
//! traits.

mod in_memory;
mod sql_contact_store;
mod sql_email_store;
mod sql_phone_store;
mod traits;

pub use in_memory::{InMemoryContactStore, InMemoryEmailStore, InMemoryPhoneStore};
pub use sql_contact_store::SqlContactStore;
pub use sql_email_store::SqlEmailStore;
pub use sql_phone_store::SqlPhoneStore;
pub use traits::{ContactStore, EmailStore, PhoneStore};
