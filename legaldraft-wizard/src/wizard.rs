//! UI-facing wrapper that pairs a session with its collaborators.

use legaldraft_types::{
    AnswerSnapshot, ChoiceOption, ContactField, ContactSlot, ListName, Notifier, QuestionId,
    ReferenceData, SectionId,
};

use crate::{Advance, Event, FormDefinition, WizardError, WizardSession, choice_labels, options_for};

/// A running wizard: form definition, session state, reference data and a
/// notification sink.
///
/// Errors never escape as `Err`: they are reported through the notifier and
/// the session stays in its last good state. Methods return whether the
/// operation took effect so a UI can refresh.
pub struct Wizard<R, N> {
    form: FormDefinition,
    session: WizardSession,
    reference: R,
    notifier: N,
}

impl<R: ReferenceData, N: Notifier> Wizard<R, N> {
    pub fn new(form: FormDefinition, reference: R, notifier: N) -> Self {
        let session = WizardSession::new(&form);
        Self {
            form,
            session,
            reference,
            notifier,
        }
    }

    pub fn form(&self) -> &FormDefinition {
        &self.form
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    pub fn current(&self) -> &SectionId {
        self.session.current()
    }

    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    pub fn set_answer(&mut self, question: impl Into<QuestionId>, value: impl Into<String>) {
        self.session.set_answer(&self.form, question, value);
    }

    pub fn can_advance(&self, section: &SectionId) -> bool {
        self.session.can_advance(&self.form, section)
    }

    /// Whether the "next" button should be enabled.
    pub fn can_advance_current(&self) -> bool {
        !self.session.is_complete() && self.can_advance(self.session.current())
    }

    /// Whether the "back" button should be enabled.
    pub fn can_retreat(&self) -> bool {
        !self.session.is_complete() && self.session.history().len() > 1
    }

    /// Move to the next section, or complete the form at the last one.
    pub fn advance(&mut self) -> bool {
        match self.session.advance(&self.form) {
            Ok(Advance::Moved(_)) => true,
            Ok(Advance::Completed) => {
                self.notifier
                    .notify_success(&format!("{} is complete", self.form.name()));
                true
            }
            Err(err) => {
                self.report(&err.into());
                false
            }
        }
    }

    pub fn retreat(&mut self) -> bool {
        self.session.retreat()
    }

    pub fn add_entry(&mut self, list: ListName) -> usize {
        self.session.add_entry(list)
    }

    pub fn remove_entry(&mut self, list: ListName, index: usize) -> bool {
        match self.session.remove_entry(list, index) {
            Ok(removed) => removed,
            Err(err) => {
                self.report(&err.into());
                false
            }
        }
    }

    pub fn update_entry(
        &mut self,
        list: ListName,
        index: usize,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> bool {
        match self.session.update_entry(list, index, field, value) {
            Ok(()) => true,
            Err(err) => {
                self.report(&err.into());
                false
            }
        }
    }

    pub fn update_contact(
        &mut self,
        slot: ContactSlot,
        field: ContactField,
        value: impl Into<String>,
    ) {
        self.session.update_contact(slot, field, value);
    }

    /// Start over.
    pub fn reset(&mut self) {
        self.session.reset(&self.form);
    }

    /// Apply an event, reporting any failure.
    pub fn dispatch(&mut self, event: Event) -> bool {
        let completes = event == Event::Advance;
        match self.session.apply(&self.form, event) {
            Ok(()) => {
                if completes && self.session.is_complete() {
                    self.notifier
                        .notify_success(&format!("{} is complete", self.form.name()));
                }
                true
            }
            Err(err) => {
                self.report(&err);
                false
            }
        }
    }

    /// The options currently available for a choice question.
    pub fn options_for(&self, question: &QuestionId) -> Vec<ChoiceOption> {
        options_for(&self.form, question, self.session.answers(), &self.reference)
    }

    /// Snapshot of the collected data with display labels for choice answers.
    pub fn snapshot(&self) -> AnswerSnapshot {
        let labels = choice_labels(&self.form, self.session.answers(), &self.reference);
        self.session.snapshot().with_labels(labels)
    }

    fn report(&self, err: &WizardError) {
        tracing::warn!(section = %self.session.current(), error = %err, "wizard operation failed");
        self.notifier.notify_error(&err.to_string());
    }
}
