use legaldraft_types::{ContactField, ContactSlot, ListName, SectionId};

use crate::{FormDefinition, WizardSession};

/// Decides whether a section may be left through `advance`.
///
/// Every section uses `RequiredAnswers` unless the form overrides it. An
/// override replaces the generic rule for that section; wrap it in `All`
/// together with `RequiredAnswers` to keep both.
#[derive(Debug, Clone)]
pub enum AdvanceRule {
    /// Every question of the section that is not optional has a non-blank answer.
    RequiredAnswers,

    /// The section can always be left (e.g. an optional notary block).
    Always,

    /// At least one entry of `list` has every field in `fields` filled in.
    RepeatedComplete {
        list: ListName,
        fields: Vec<&'static str>,
    },

    /// The given emergency contact has every field in `fields` filled in.
    ContactComplete {
        slot: ContactSlot,
        fields: Vec<ContactField>,
    },

    /// Every inner rule holds.
    All(Vec<AdvanceRule>),

    /// Arbitrary predicate over the session.
    Custom(fn(&WizardSession) -> bool),
}

impl AdvanceRule {
    /// `RepeatedComplete` over all the fields the list defines.
    pub fn repeated_complete(list: ListName) -> Self {
        Self::RepeatedComplete {
            list,
            fields: list.fields().to_vec(),
        }
    }

    /// Evaluate this rule for `section`. Unknown sections never pass.
    pub fn allows(
        &self,
        form: &FormDefinition,
        section: &SectionId,
        session: &WizardSession,
    ) -> bool {
        let Some(definition) = form.section(section) else {
            return false;
        };
        match self {
            Self::RequiredAnswers => form
                .questions_in(definition)
                .filter(|q| q.requires_answer())
                .all(|q| session.answers().has_value(q.id())),
            Self::Always => true,
            Self::RepeatedComplete { list, fields } => {
                session.lists().get(*list).any_complete(fields)
            }
            Self::ContactComplete { slot, fields } => {
                session.contacts().get(*slot).is_complete(fields)
            }
            Self::All(rules) => rules.iter().all(|r| r.allows(form, section, session)),
            Self::Custom(predicate) => predicate(session),
        }
    }
}
