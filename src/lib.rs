//! Contacts Directory - a contact store whose records own a variable number of
//! email addresses and phone numbers, each kept in its own table.
//!
//! The core of the crate is the aggregation service, which assembles fully
//! hydrated contacts from three independently queried stores and orders the
//! multi-table writes of contact creation.
//!
//! # Architecture
//!
//! - **models**: Contact, Email and Phone data structures
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **db**: SQLite pool construction and table bootstrap
//! - **stores**: Store traits with SQL and in-memory implementations
//! - **services**: The contact aggregation service
//! - **server**: MCP protocol server exposing the service as tools

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
pub mod stores;

pub use config::{Config, StoreBackend};
pub use error::{AggregationError, AggregationStep, ConfigError, StorageError, ValidationError};
pub use models::{Contact, CreateContactData, Email, NewContact, NewPhone, Phone, PhoneType};
pub use server::ContactsMcpServer;
pub use services::{ContactAggregationService, ContactService};
pub use stores::{ContactStore, EmailStore, PhoneStore};
