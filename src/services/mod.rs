//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! stores. They provide a clean boundary between the MCP handlers and the
//! data access layer.

mod contact_service;

pub use contact_service::{ContactAggregationService, ContactService};

// Re-export common types used by services
pub use crate::models::{Contact, CreateContactData};
