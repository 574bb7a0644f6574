use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::QuestionId;

/// Collected answers from a form, keyed by question id.
///
/// Every value is stored as the raw string the user typed or picked. Nothing is
/// validated on write; sections decide what counts as complete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    values: HashMap<QuestionId, String>,
}

impl Answers {
    /// Create a new empty answer map.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Store an answer, returning the previous value if there was one.
    pub fn insert(
        &mut self,
        question: impl Into<QuestionId>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.values.insert(question.into(), value.into())
    }

    /// Get the answer for a question.
    pub fn get(&self, question: &QuestionId) -> Option<&str> {
        self.values.get(question).map(String::as_str)
    }

    /// Get the answer by plain string key.
    pub fn get_str(&self, question: &str) -> Option<&str> {
        self.get(&QuestionId::new(question))
    }

    /// Check if an answer exists (possibly empty).
    pub fn contains(&self, question: &QuestionId) -> bool {
        self.values.contains_key(question)
    }

    /// Check if a question has a non-blank answer.
    pub fn has_value(&self, question: &QuestionId) -> bool {
        self.get(question).is_some_and(|v| !v.trim().is_empty())
    }

    /// Remove an answer.
    pub fn remove(&mut self, question: &QuestionId) -> Option<String> {
        self.values.remove(question)
    }

    /// Remove every answer.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Get an iterator over all question-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &str)> {
        self.values.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Get the number of stored answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<QuestionId>, V: Into<String>> FromIterator<(K, V)> for Answers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut answers = Answers::new();
        answers.insert("full_name", "Alice Doe");
        assert_eq!(answers.get_str("full_name"), Some("Alice Doe"));
        assert_eq!(answers.get_str("missing"), None);
    }

    #[test]
    fn insert_overwrites() {
        let mut answers = Answers::new();
        answers.insert("city", "Austin");
        let previous = answers.insert("city", "Dallas");
        assert_eq!(previous.as_deref(), Some("Austin"));
        assert_eq!(answers.get_str("city"), Some("Dallas"));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn blank_answers_have_no_value() {
        let mut answers = Answers::new();
        answers.insert("city", "   ");
        let city = QuestionId::new("city");
        assert!(answers.contains(&city));
        assert!(!answers.has_value(&city));
    }

    #[test]
    fn collect_from_pairs() {
        let answers: Answers = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers.get_str("b"), Some("2"));
    }
}
