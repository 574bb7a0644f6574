//! The mutable state of one run through a form.

use legaldraft_types::{
    AnswerSnapshot, Answers, ContactField, ContactSlot, EmergencyContacts, EntryError, EntryLists,
    ListName, NavigationError, QuestionId, SectionId,
};

use crate::FormDefinition;

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState<'a> {
    InSection(&'a SectionId),
    Complete,
}

/// Result of a successful `advance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the given section.
    Moved(SectionId),
    /// Left the terminal section; the form is complete.
    Completed,
}

/// Answers, repeated entries and navigation history of one wizard run.
///
/// The session never holds a reference to its [`FormDefinition`]; every
/// operation that needs configuration takes it as an argument.
///
/// Invariants: `history` is never empty, starts with the form's entry
/// section and ends with the current section; every entry list holds at
/// least one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardSession {
    history: Vec<SectionId>,
    answers: Answers,
    lists: EntryLists,
    contacts: EmergencyContacts,
    complete: bool,
}

impl WizardSession {
    /// Create a fresh session positioned at the form's entry section.
    pub fn new(form: &FormDefinition) -> Self {
        Self {
            history: vec![form.entry().clone()],
            answers: Answers::new(),
            lists: EntryLists::new(),
            contacts: EmergencyContacts::default(),
            complete: false,
        }
    }

    /// The current section (the last history entry).
    pub fn current(&self) -> &SectionId {
        // `history` always holds at least the entry section.
        &self.history[self.history.len() - 1]
    }

    pub fn history(&self) -> &[SectionId] {
        &self.history
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn lists(&self) -> &EntryLists {
        &self.lists
    }

    pub fn contacts(&self) -> &EmergencyContacts {
        &self.contacts
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn state(&self) -> WizardState<'_> {
        if self.complete {
            WizardState::Complete
        } else {
            WizardState::InSection(self.current())
        }
    }

    /// Store an answer, overwriting any previous value.
    ///
    /// The value is normalized for the question's kind first (see
    /// [`Question::normalize`](legaldraft_types::Question::normalize)). Every
    /// declared dependent of `question` is cleared, since its options were
    /// derived from the old value. Returns the cleared question ids.
    pub fn set_answer(
        &mut self,
        form: &FormDefinition,
        question: impl Into<QuestionId>,
        value: impl Into<String>,
    ) -> Vec<QuestionId> {
        let question = question.into();
        let value = value.into();
        let value = match form.question(&question) {
            Some(q) => q.normalize(value),
            None => value,
        };
        let cleared: Vec<QuestionId> = form
            .dependents_of(&question)
            .into_iter()
            .filter(|dep| self.answers.remove(dep).is_some())
            .collect();
        if !cleared.is_empty() {
            tracing::debug!(%question, ?cleared, "cleared dependent answers");
        }
        self.answers.insert(question, value);
        cleared
    }

    /// Whether `section` may be left through `advance`.
    pub fn can_advance(&self, form: &FormDefinition, section: &SectionId) -> bool {
        form.rule(section).allows(form, section, self)
    }

    /// Move past the current section.
    ///
    /// On error the session is left untouched.
    pub fn advance(&mut self, form: &FormDefinition) -> Result<Advance, NavigationError> {
        if self.complete {
            return Err(NavigationError::AlreadyComplete);
        }
        let current = self.current().clone();
        let section = form
            .section(&current)
            .ok_or_else(|| NavigationError::UnknownSection(current.clone()))?;
        if !self.can_advance(form, &current) {
            return Err(NavigationError::SectionIncomplete(current));
        }
        let Some(target) = &section.next else {
            self.complete = true;
            tracing::info!(form = form.name(), section = %current, "form complete");
            return Ok(Advance::Completed);
        };
        if form.section(target).is_none() {
            return Err(NavigationError::UnknownTarget {
                from: current,
                target: target.clone(),
            });
        }
        tracing::debug!(from = %current, to = %target, "advanced");
        self.history.push(target.clone());
        Ok(Advance::Moved(target.clone()))
    }

    /// Step back to the previous section.
    ///
    /// Returns `false` (and does nothing) at the entry section or once the
    /// form is complete.
    pub fn retreat(&mut self) -> bool {
        if self.complete || self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        tracing::debug!(to = %self.current(), "retreated");
        true
    }

    /// Append a blank entry to `list`, returning its index.
    pub fn add_entry(&mut self, list: ListName) -> usize {
        self.lists.get_mut(list).add()
    }

    /// Remove an entry; `Ok(false)` when it is the last one.
    pub fn remove_entry(&mut self, list: ListName, index: usize) -> Result<bool, EntryError> {
        self.lists.get_mut(list).remove(index)
    }

    pub fn update_entry(
        &mut self,
        list: ListName,
        index: usize,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), EntryError> {
        self.lists.get_mut(list).update(index, field, value)
    }

    pub fn update_contact(
        &mut self,
        slot: ContactSlot,
        field: ContactField,
        value: impl Into<String>,
    ) {
        self.contacts.get_mut(slot).set(field, value);
    }

    /// Discard everything and return to the entry section.
    pub fn reset(&mut self, form: &FormDefinition) {
        *self = Self::new(form);
    }

    /// 1-based position of the current section along the form's chain, and the
    /// chain length. Sections off the chain report position 0.
    pub fn progress(&self, form: &FormDefinition) -> (usize, usize) {
        let chain = form.chain();
        let position = chain
            .iter()
            .position(|id| *id == self.current())
            .map_or(0, |i| i + 1);
        (position, chain.len())
    }

    /// Copy out everything collected so far.
    pub fn snapshot(&self) -> AnswerSnapshot {
        AnswerSnapshot::new(&self.answers, &self.lists, &self.contacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AdvanceRule;
    use legaldraft_types::{Question, Section};

    fn form() -> FormDefinition {
        FormDefinition::builder("test", "start")
            .section(
                Section::new("start", "Start")
                    .with_questions(["name", "nickname"])
                    .then("kids"),
            )
            .section(Section::new("kids", "Children").then("notary"))
            .section(Section::new("notary", "Notary").with_questions(["notary_name"]))
            .question(Question::text("name", "Name"))
            .question(Question::text("nickname", "Nickname").optional())
            .question(Question::text("notary_name", "Notary"))
            .rule("kids", AdvanceRule::repeated_complete(ListName::Children))
            .rule("notary", AdvanceRule::Always)
            .build()
            .unwrap()
    }

    #[test]
    fn initial_state() {
        let form = form();
        let session = WizardSession::new(&form);
        assert_eq!(session.current(), "start");
        assert_eq!(session.history(), &[SectionId::new("start")]);
        assert!(session.answers().is_empty());
        assert!(!session.is_complete());
        for list in session.lists().iter() {
            assert_eq!(list.len(), 1);
        }
    }

    #[test]
    fn optional_questions_are_skipped_by_required_rule() {
        let form = form();
        let mut session = WizardSession::new(&form);
        assert!(!session.can_advance(&form, &"start".into()));
        session.set_answer(&form, "name", "Alice");
        assert!(session.can_advance(&form, &"start".into()));
    }

    #[test]
    fn advance_is_refused_while_incomplete() {
        let form = form();
        let mut session = WizardSession::new(&form);
        let before = session.clone();
        let err = session.advance(&form).unwrap_err();
        assert_eq!(err, NavigationError::SectionIncomplete("start".into()));
        assert_eq!(session, before);
    }

    #[test]
    fn children_need_name_and_birth_date() {
        let form = form();
        let mut session = WizardSession::new(&form);
        session.set_answer(&form, "name", "Alice");
        session.advance(&form).unwrap();
        let kids = SectionId::new("kids");

        session.update_entry(ListName::Children, 0, "full_name", "Sam").unwrap();
        assert!(!session.can_advance(&form, &kids));
        session.add_entry(ListName::Children);
        session
            .update_entry(ListName::Children, 1, "full_name", "Kim")
            .unwrap();
        session
            .update_entry(ListName::Children, 1, "date_of_birth", "2019-04-02")
            .unwrap();
        assert!(session.can_advance(&form, &kids));
    }

    #[test]
    fn terminal_section_completes() {
        let form = form();
        let mut session = WizardSession::new(&form);
        session.set_answer(&form, "name", "Alice");
        session.advance(&form).unwrap();
        session
            .update_entry(ListName::Children, 0, "full_name", "Sam")
            .unwrap();
        session
            .update_entry(ListName::Children, 0, "date_of_birth", "2020-01-01")
            .unwrap();
        assert_eq!(session.advance(&form).unwrap(), Advance::Moved("notary".into()));
        assert_eq!(session.advance(&form).unwrap(), Advance::Completed);
        assert_eq!(session.state(), WizardState::Complete);
        assert_eq!(session.advance(&form), Err(NavigationError::AlreadyComplete));
        assert!(!session.retreat());
        assert_eq!(session.current(), "notary");
    }

    #[test]
    fn retreat_at_entry_is_a_no_op() {
        let form = form();
        let mut session = WizardSession::new(&form);
        assert!(!session.retreat());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn reset_restores_initial_state() {
        let form = form();
        let mut session = WizardSession::new(&form);
        session.set_answer(&form, "name", "Alice");
        session.advance(&form).unwrap();
        session.add_entry(ListName::Parents);
        session.update_contact(ContactSlot::Primary, ContactField::Name, "Bob");
        session.reset(&form);
        assert_eq!(session, WizardSession::new(&form));
    }

    #[test]
    fn progress_along_chain() {
        let form = form();
        let mut session = WizardSession::new(&form);
        assert_eq!(session.progress(&form), (1, 3));
        session.set_answer(&form, "name", "Alice");
        session.advance(&form).unwrap();
        assert_eq!(session.progress(&form), (2, 3));
    }

    #[test]
    fn country_change_clears_location_answers() {
        let form = form();
        let mut session = WizardSession::new(&form);
        session.set_answer(&form, "country", "1");
        session.set_answer(&form, "state", "TX");
        session.set_answer(&form, "notary_state", "CA");
        let mut cleared = session.set_answer(&form, "country", "2");
        cleared.sort();
        assert_eq!(cleared, vec!["notary_state", "state"]);
        assert!(!session.answers().contains(&"state".into()));
        assert!(!session.answers().contains(&"governing_state".into()));
        assert_eq!(session.answers().get_str("country"), Some("2"));
    }
}
