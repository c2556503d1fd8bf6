//! Error types for the contacts directory.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Stores report [`StorageError`]; the aggregation service wraps those into
//! [`AggregationError`] so callers can tell which step of a multi-store
//! operation failed.

use std::fmt;
use thiserror::Error;

/// Errors surfaced directly by a store implementation.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The database driver rejected or failed the statement
    #[error("{operation}: database error: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// The store backend failed without a driver error (in-memory and test stores)
    #[error("{operation}: {message}")]
    Backend {
        operation: &'static str,
        message: String,
    },
}

impl StorageError {
    /// Build a closure that tags a `sqlx::Error` with the failing operation.
    ///
    /// Intended for `.map_err(StorageError::database("create"))`.
    pub fn database(operation: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| StorageError::Database { operation, source }
    }

    /// Create a backend error for stores that have no driver.
    pub fn backend(operation: &'static str, message: impl Into<String>) -> Self {
        StorageError::Backend {
            operation,
            message: message.into(),
        }
    }

    /// The store operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            StorageError::Database { operation, .. } | StorageError::Backend { operation, .. } => {
                operation
            }
        }
    }
}

/// The step of an orchestrated operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationStep {
    ListContacts,
    FetchEmails,
    FetchPhones,
    CreateContact,
    CreateEmails,
    CreatePhones,
    DeleteContact,
}

impl fmt::Display for AggregationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = match self {
            Self::ListContacts => "listing contacts",
            Self::FetchEmails => "fetching contact emails",
            Self::FetchPhones => "fetching contact phones",
            Self::CreateContact => "creating contact",
            Self::CreateEmails => "inserting contact emails",
            Self::CreatePhones => "inserting contact phones",
            Self::DeleteContact => "deleting contact",
        };
        f.write_str(step)
    }
}

/// A store call failed while the service was orchestrating a multi-step operation.
///
/// Writes performed before the failing step are not rolled back.
#[derive(Error, Debug)]
#[error("error while {step}{}: {source}", contact_suffix(.contact_id))]
pub struct AggregationError {
    /// Which step failed
    pub step: AggregationStep,

    /// The contact being processed, when one had been identified
    pub contact_id: Option<i64>,

    /// The underlying store failure
    #[source]
    pub source: StorageError,
}

fn contact_suffix(contact_id: &Option<i64>) -> String {
    match contact_id {
        Some(id) => format!(" (contact {})", id),
        None => String::new(),
    }
}

impl AggregationError {
    pub fn new(step: AggregationStep, contact_id: Option<i64>, source: StorageError) -> Self {
        Self {
            step,
            contact_id,
            source,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Client input rejected before it reaches the aggregation service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank
    #[error("{0} is required")]
    Required(&'static str),

    /// A contact id must be a positive integer
    #[error("Invalid contact id: {0}")]
    InvalidContactId(i64),
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with AggregationError
pub type AggregationResult<T> = Result<T, AggregationError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
