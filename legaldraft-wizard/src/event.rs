use legaldraft_types::{ContactField, ContactSlot, ListName, QuestionId};

use crate::{FormDefinition, WizardError, WizardSession};

/// A user action on the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SetAnswer {
        question: QuestionId,
        value: String,
    },
    Advance,
    Retreat,
    AddEntry(ListName),
    RemoveEntry {
        list: ListName,
        index: usize,
    },
    UpdateEntry {
        list: ListName,
        index: usize,
        field: String,
        value: String,
    },
    UpdateContact {
        slot: ContactSlot,
        field: ContactField,
        value: String,
    },
    Reset,
}

impl Event {
    pub fn set_answer(question: impl Into<QuestionId>, value: impl Into<String>) -> Self {
        Self::SetAnswer {
            question: question.into(),
            value: value.into(),
        }
    }

    pub fn update_entry(
        list: ListName,
        index: usize,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::UpdateEntry {
            list,
            index,
            field: field.into(),
            value: value.into(),
        }
    }
}

impl WizardSession {
    /// Apply one event in place. On error the session is unchanged.
    pub fn apply(&mut self, form: &FormDefinition, event: Event) -> Result<(), WizardError> {
        match event {
            Event::SetAnswer { question, value } => {
                self.set_answer(form, question, value);
            }
            Event::Advance => {
                self.advance(form)?;
            }
            Event::Retreat => {
                self.retreat();
            }
            Event::AddEntry(list) => {
                self.add_entry(list);
            }
            Event::RemoveEntry { list, index } => {
                self.remove_entry(list, index)?;
            }
            Event::UpdateEntry {
                list,
                index,
                field,
                value,
            } => self.update_entry(list, index, field, value)?,
            Event::UpdateContact { slot, field, value } => self.update_contact(slot, field, value),
            Event::Reset => self.reset(form),
        }
        Ok(())
    }
}

/// Compute the session that results from `event`, leaving `session` as is.
pub fn transition(
    form: &FormDefinition,
    session: &WizardSession,
    event: Event,
) -> Result<WizardSession, WizardError> {
    let mut next = session.clone();
    next.apply(form, event)?;
    Ok(next)
}
