//! Core types for the legaldraft crates.
//!
//! This crate provides the foundational types for defining document forms:
//! - `Section` and `Question` - The immutable form configuration
//! - `QuestionId` and `SectionId` - Keys into the configuration and the answer map
//! - `Answers`, `EntryLists` and `EmergencyContacts` - Collected data
//! - `AnswerSnapshot` - The read-only view handed to document renderers
//! - `ReferenceData` and `Notifier` traits - External collaborators

mod ids;
pub use ids::{QuestionId, SectionId};

mod answers;
pub use answers::Answers;

mod question;
pub use question::{ChoiceOption, OptionSource, Question, QuestionKind};

mod section;
pub use section::Section;

mod entries;
pub use entries::{
    ContactField, ContactSlot, EmergencyContact, EmergencyContacts, EntryList, EntryLists,
    ListName, RepeatedEntry,
};

mod snapshot;
pub use snapshot::AnswerSnapshot;

mod error;
pub use error::{EntryError, NavigationError};

mod traits;
pub use traits::{Notice, Notifier, RefItem, ReferenceData};

/// Question ids whose answers are read by the built-in location cascade.
pub mod well_known {
    pub const COUNTRY: &str = "country";
    pub const STATE: &str = "state";
    pub const GOVERNING_STATE: &str = "governing_state";
    pub const NOTARY_STATE: &str = "notary_state";

    /// Answers that become stale whenever `country` changes.
    pub const COUNTRY_DEPENDENTS: [&str; 3] = [STATE, GOVERNING_STATE, NOTARY_STATE];
}
