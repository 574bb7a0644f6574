use serde::{Deserialize, Serialize};

use crate::{ListName, QuestionId};

/// A single question in a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// The key of this question's answer in the `Answers` map.
    id: QuestionId,

    /// The prompt text shown to the user.
    prompt: String,

    /// The kind of question (determines the input widget).
    kind: QuestionKind,

    /// Optional questions never block a section from advancing.
    #[serde(default)]
    optional: bool,

    /// Choice questions may offer an explicit "None" option ahead of the
    /// regular ones.
    #[serde(default)]
    none_option: bool,

    /// Question to focus after this one, if the UI wants to jump.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_next: Option<QuestionId>,
}

impl Question {
    /// Create a new required question.
    pub fn new(id: impl Into<QuestionId>, prompt: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind,
            optional: false,
            none_option: false,
            default_next: None,
        }
    }

    pub fn text(id: impl Into<QuestionId>, prompt: impl Into<String>) -> Self {
        Self::new(id, prompt, QuestionKind::Text)
    }

    pub fn date(id: impl Into<QuestionId>, prompt: impl Into<String>) -> Self {
        Self::new(id, prompt, QuestionKind::Date)
    }

    pub fn textarea(id: impl Into<QuestionId>, prompt: impl Into<String>) -> Self {
        Self::new(id, prompt, QuestionKind::Textarea)
    }

    /// Create a select question with a fixed option list.
    pub fn select<S: Into<String>>(
        id: impl Into<QuestionId>,
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        let options = options.into_iter().map(Into::into).collect();
        Self::new(id, prompt, QuestionKind::Select(OptionSource::Static(options)))
    }

    /// Mark this question as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Offer [`ChoiceOption::none`] whenever this question has options.
    pub fn with_none_option(mut self) -> Self {
        self.none_option = true;
        self
    }

    /// Set the question the UI should move to after this one.
    pub fn with_default_next(mut self, next: impl Into<QuestionId>) -> Self {
        self.default_next = Some(next.into());
        self
    }

    /// Get the question id.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn default_next(&self) -> Option<&QuestionId> {
        self.default_next.as_ref()
    }

    pub fn offers_none(&self) -> bool {
        self.none_option && self.kind.is_choice()
    }

    /// The value actually stored when `value` is entered for this question.
    ///
    /// Confirmations store `"true"` for a ticked box (`true`, `yes`, `on` or
    /// `1`, in any case) and the empty string otherwise. Other kinds store the
    /// value unchanged.
    pub fn normalize(&self, value: String) -> String {
        match self.kind {
            QuestionKind::Confirmation => {
                let ticked = ["true", "yes", "on", "1"]
                    .iter()
                    .any(|t| value.trim().eq_ignore_ascii_case(t));
                if ticked { "true".to_string() } else { String::new() }
            }
            _ => value,
        }
    }

    /// Whether the generic completeness rule expects a non-empty answer here.
    ///
    /// Repeated groups store their data outside the answer map and are checked
    /// by dedicated section rules instead.
    pub fn requires_answer(&self) -> bool {
        !self.optional && !self.kind.is_repeated_group()
    }

    /// The question whose answer determines this question's options, if any.
    pub fn depends_on(&self) -> Option<&QuestionId> {
        match &self.kind {
            QuestionKind::Select(OptionSource::StatesOf(parent)) => Some(parent),
            _ => None,
        }
    }
}

/// The kind of question, determining the input widget and storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Single-line free text.
    Text,

    /// Numeric text.
    Number,

    Email,

    Phone,

    /// A calendar date, stored as entered (usually `YYYY-MM-DD`).
    Date,

    /// Pick one option from a list that may be derived from other answers.
    Select(OptionSource),

    /// Pick one of a fixed set of options, shown all at once.
    Radio(Vec<String>),

    /// Multi-line free text.
    Textarea,

    /// A checkbox; stored as `"true"` when ticked and `""` when not.
    Confirmation,

    /// A user-extensible list of structured records.
    RepeatedGroup(ListName),

    /// The fixed primary/secondary emergency contact pair.
    EmergencyContacts,
}

impl QuestionKind {
    /// Check if this kind stores its data outside the answer map.
    pub fn is_repeated_group(&self) -> bool {
        matches!(self, Self::RepeatedGroup(_) | Self::EmergencyContacts)
    }

    /// Check if this kind offers a fixed or derived set of choices.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Select(_) | Self::Radio(_))
    }
}

/// Where a select question gets its options from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionSource {
    /// A fixed list; each option is both value and label.
    Static(Vec<String>),

    /// `ReferenceData::list_countries()`.
    Countries,

    /// `ReferenceData::list_states(country)`, keyed by the answer to the given question.
    StatesOf(QuestionId),
}

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// The value stored in `Answers` when picked.
    pub value: String,

    /// The text shown to the user.
    pub label: String,
}

impl ChoiceOption {
    /// Stored value of the explicit "None" option.
    pub const NONE_VALUE: &'static str = "none";

    /// The explicit "None" option, for declining an optional choice.
    pub fn none() -> Self {
        Self::new(Self::NONE_VALUE, "None")
    }

    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_questions_do_not_require_answers() {
        let q = Question::text("notary_name", "Notary name").optional();
        assert!(q.is_optional());
        assert!(!q.requires_answer());
    }

    #[test]
    fn repeated_groups_do_not_require_answers() {
        let q = Question::new(
            "children",
            "Children",
            QuestionKind::RepeatedGroup(ListName::Children),
        );
        assert!(!q.requires_answer());
    }

    #[test]
    fn derived_select_reports_its_parent() {
        let q = Question::new(
            "state",
            "State",
            QuestionKind::Select(OptionSource::StatesOf("country".into())),
        );
        assert_eq!(q.depends_on().map(QuestionId::as_str), Some("country"));
        assert!(Question::select("x", "X", ["a", "b"]).depends_on().is_none());
    }

    #[test]
    fn confirmations_store_true_or_nothing() {
        let q = Question::new("durable", "Durable?", QuestionKind::Confirmation);
        assert_eq!(q.normalize("true".into()), "true");
        assert_eq!(q.normalize(" Yes ".into()), "true");
        assert_eq!(q.normalize("on".into()), "true");
        assert_eq!(q.normalize("false".into()), "");
        assert_eq!(q.normalize("0".into()), "");
        assert_eq!(Question::text("name", "Name").normalize("false".into()), "false");
    }

    #[test]
    fn none_option_needs_a_choice_kind() {
        assert!(Question::select("x", "X", ["a"]).with_none_option().offers_none());
        assert!(!Question::select("x", "X", ["a"]).offers_none());
        assert!(!Question::text("x", "X").with_none_option().offers_none());
    }
}
