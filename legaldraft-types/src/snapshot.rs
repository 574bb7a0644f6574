use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Answers, EmergencyContacts, EntryLists, ListName, QuestionId, RepeatedEntry};

/// A read-only copy of everything a session collected.
///
/// This is what document renderers consume. It owns its data, so rendering
/// can never write back into the session it came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerSnapshot {
    /// Raw answers as stored by the wizard.
    pub answers: Answers,

    /// Display labels for choice answers whose stored value is an id
    /// (e.g. `state = "TX"` with label `"Texas"`).
    #[serde(default)]
    pub labels: Answers,

    #[serde(default)]
    pub lists: BTreeMap<ListName, Vec<RepeatedEntry>>,

    #[serde(default)]
    pub contacts: EmergencyContacts,
}

impl AnswerSnapshot {
    /// Build a snapshot by copying the session's collections.
    pub fn new(answers: &Answers, lists: &EntryLists, contacts: &EmergencyContacts) -> Self {
        Self {
            answers: answers.clone(),
            labels: Answers::new(),
            lists: lists
                .iter()
                .map(|l| (l.name(), l.entries().to_vec()))
                .collect(),
            contacts: contacts.clone(),
        }
    }

    /// Attach display labels for choice answers.
    pub fn with_labels(mut self, labels: Answers) -> Self {
        self.labels = labels;
        self
    }

    /// The text to show for a question: its label if it has one, else the raw answer.
    ///
    /// Blank values count as missing.
    pub fn display(&self, question: &str) -> Option<&str> {
        let id = QuestionId::new(question);
        [&self.labels, &self.answers]
            .into_iter()
            .find_map(|map| map.get(&id).filter(|v| !v.trim().is_empty()))
    }

    /// Entries of a list; empty if the list was never captured.
    pub fn entries(&self, list: ListName) -> &[RepeatedEntry] {
        self.lists.get(&list).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_take_precedence() {
        let mut answers = Answers::new();
        answers.insert("state", "TX");
        answers.insert("city", "Austin");
        let mut labels = Answers::new();
        labels.insert("state", "Texas");

        let snapshot = AnswerSnapshot::new(&answers, &EntryLists::new(), &Default::default())
            .with_labels(labels);
        assert_eq!(snapshot.display("state"), Some("Texas"));
        assert_eq!(snapshot.display("city"), Some("Austin"));
        assert_eq!(snapshot.display("zip"), None);
    }

    #[test]
    fn copies_every_list() {
        let snapshot =
            AnswerSnapshot::new(&Answers::new(), &EntryLists::new(), &Default::default());
        for list in ListName::ALL {
            assert_eq!(snapshot.entries(list).len(), 1);
        }
        assert!(AnswerSnapshot::default().entries(ListName::Children).is_empty());
    }
}
