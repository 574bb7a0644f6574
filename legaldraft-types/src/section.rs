use serde::{Deserialize, Serialize};

use crate::{QuestionId, SectionId};

/// A named, ordered group of questions presented together as one wizard step.
///
/// Sections form a chain through `next`. A section without `next` is terminal:
/// advancing from it completes the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Questions shown in this step, in display order.
    pub questions: Vec<QuestionId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<SectionId>,
}

impl Section {
    /// Create a terminal section with no questions.
    pub fn new(id: impl Into<SectionId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            questions: Vec::new(),
            next: None,
        }
    }

    /// Set the description shown under the title.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append questions to this section.
    pub fn with_questions<Q: Into<QuestionId>>(
        mut self,
        questions: impl IntoIterator<Item = Q>,
    ) -> Self {
        self.questions.extend(questions.into_iter().map(Into::into));
        self
    }

    /// Set the section that follows this one.
    pub fn then(mut self, next: impl Into<SectionId>) -> Self {
        self.next = Some(next.into());
        self
    }
}
