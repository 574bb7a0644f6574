use crate::{ListName, SectionId};

/// Error type for section navigation.
///
/// None of these are fatal: the session stays where it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// A section's `next` names a section that is not configured.
    #[error("Section '{from}' leads to unknown section '{target}'")]
    UnknownTarget { from: SectionId, target: SectionId },

    /// The current section id is not configured.
    #[error("Unknown section '{0}'")]
    UnknownSection(SectionId),

    /// `advance` was requested while the current section is incomplete.
    #[error("Section '{0}' is not complete yet")]
    SectionIncomplete(SectionId),

    /// The form is complete; only a reset leaves this state.
    #[error("The form is already complete")]
    AlreadyComplete,
}

/// Error type for repeated entry list operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("No entry {index} in {list} (list has {len} entries)")]
    OutOfRange {
        list: ListName,
        index: usize,
        len: usize,
    },
}
