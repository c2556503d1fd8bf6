//! Hand-written store doubles with call tracking and failure injection.

#![allow(dead_code)]

mod mock_contact_store;
mod mock_email_store;
mod mock_phone_store;

pub use mock_contact_store::MockContactStore;
pub use mock_email_store::MockEmailStore;
pub use mock_phone_store::MockPhoneStore;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Per-method call counter shared by the mocks.
#[derive(Clone, Default)]
pub struct CallTracker {
    counts: Arc<Mutex<HashMap<String, usize>>>,
}

impl CallTracker {
    pub fn track(&self, method: &str) {
        let mut counts = self.counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, method: &str) -> usize {
        let counts = self.counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    pub fn reset(&self) {
        self.counts.lock().unwrap().clear();
    }
}
