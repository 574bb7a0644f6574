use legaldraft_types::{EntryError, NavigationError, SectionId};

/// Error type for building a form definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Entry section '{0}' is not defined")]
    UnknownEntry(SectionId),

    #[error("Section '{0}' is defined more than once")]
    DuplicateSection(SectionId),
}

/// Error type for session transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    Entry(#[from] EntryError),
}

impl WizardError {
    /// Check if this error came from section navigation.
    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::Navigation(_))
    }
}
