//! In-memory collaborators for running forms without a UI.
//!
//! `StaticReferenceData` serves a fixed country/state table and
//! `RecordingNotifier` captures notifications so tests can assert on them.
//!
//! # Example
//!
//! ```rust,ignore
//! use legaldraft::testing::{RecordingNotifier, StaticReferenceData};
//! use legaldraft::Wizard;
//!
//! let reference = StaticReferenceData::new()
//!     .with_country("1", "United States")
//!     .with_state("1", "TX", "Texas");
//! let notifier = RecordingNotifier::new();
//! let mut wizard = Wizard::new(form, reference, &notifier);
//! wizard.advance();
//! assert!(notifier.errors().is_empty());
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use crate::{Notice, Notifier, RefItem, ReferenceData};

/// Reference data backed by in-memory tables.
#[derive(Debug, Clone, Default)]
pub struct StaticReferenceData {
    countries: Vec<RefItem>,
    states: HashMap<String, Vec<RefItem>>,
}

impl StaticReferenceData {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a country.
    pub fn with_country(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.countries.push(RefItem::new(id, name));
        self
    }

    /// Add a state to a country.
    pub fn with_state(
        mut self,
        country_id: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.states
            .entry(country_id.into())
            .or_default()
            .push(RefItem::new(id, name));
        self
    }
}

impl ReferenceData for StaticReferenceData {
    fn list_countries(&self) -> Vec<RefItem> {
        self.countries.clone()
    }

    fn list_states(&self, country_id: &str) -> Vec<RefItem> {
        self.states.get(country_id).cloned().unwrap_or_default()
    }
}

/// A notifier that remembers every notice it receives.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    /// Messages of the error notices.
    pub fn errors(&self) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notice::Error(message) => Some(message.clone()),
                Notice::Success(_) => None,
            })
            .collect()
    }

    /// Messages of the success notices.
    pub fn successes(&self) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notice::Success(message) => Some(message.clone()),
                Notice::Error(_) => None,
            })
            .collect()
    }

    /// Forget all recorded notices.
    pub fn clear(&self) {
        self.notices.borrow_mut().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify_success(&self, message: &str) {
        self.notices
            .borrow_mut()
            .push(Notice::Success(message.to_string()));
    }

    fn notify_error(&self, message: &str) {
        self.notices
            .borrow_mut()
            .push(Notice::Error(message.to_string()));
    }
}
