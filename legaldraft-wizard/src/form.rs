//! Immutable form configuration: sections, questions, advance rules and
//! answer dependencies.

use std::collections::{HashMap, HashSet};

use legaldraft_types::{Question, QuestionId, Section, SectionId, well_known};

use crate::{AdvanceRule, FormError};

static DEFAULT_RULE: AdvanceRule = AdvanceRule::RequiredAnswers;

/// The complete description of one document form.
///
/// Built once at startup through [`FormDefinition::builder`] and shared
/// read-only by every session.
#[derive(Debug, Clone)]
pub struct FormDefinition {
    name: String,
    entry: SectionId,
    sections: Vec<Section>,
    questions: HashMap<QuestionId, Question>,
    rules: HashMap<SectionId, AdvanceRule>,
    dependents: HashMap<QuestionId, Vec<QuestionId>>,
}

impl FormDefinition {
    /// Start building a form whose first step is `entry`.
    ///
    /// The builder pre-declares the location cascade: `state`,
    /// `governing_state` and `notary_state` all depend on `country`.
    pub fn builder(name: impl Into<String>, entry: impl Into<SectionId>) -> FormBuilder {
        FormBuilder {
            name: name.into(),
            entry: entry.into(),
            sections: Vec::new(),
            questions: Vec::new(),
            rules: HashMap::new(),
            dependents: HashMap::new(),
        }
        .depends_on(well_known::COUNTRY, well_known::COUNTRY_DEPENDENTS)
    }

    /// The form's name, used e.g. as the document type.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entry(&self) -> &SectionId {
        &self.entry
    }

    /// Look up a section by id.
    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| &s.id == id)
    }

    /// All sections in declaration order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Look up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.get(id)
    }

    /// The questions of a section in display order. Ids without a question
    /// definition are skipped.
    pub fn questions_in<'a>(&'a self, section: &'a Section) -> impl Iterator<Item = &'a Question> {
        section.questions.iter().filter_map(|id| self.questions.get(id))
    }

    /// The advance rule for a section (`RequiredAnswers` unless overridden).
    pub fn rule(&self, section: &SectionId) -> &AdvanceRule {
        self.rules.get(section).unwrap_or(&DEFAULT_RULE)
    }

    /// Questions whose answers must be cleared whenever `question` is written,
    /// including indirect dependents.
    pub fn dependents_of(&self, question: &QuestionId) -> Vec<QuestionId> {
        let mut seen = HashSet::new();
        let mut stack = vec![question.clone()];
        let mut out = Vec::new();
        while let Some(current) = stack.pop() {
            for child in self.dependents.get(&current).into_iter().flatten() {
                if child != question && seen.insert(child.clone()) {
                    out.push(child.clone());
                    stack.push(child.clone());
                }
            }
        }
        out
    }

    /// `(from, target)` pairs where a section's `next` names an undefined section.
    pub fn dangling_references(&self) -> Vec<(SectionId, SectionId)> {
        self.sections
            .iter()
            .filter_map(|s| {
                let next = s.next.as_ref()?;
                self.section(next)
                    .is_none()
                    .then(|| (s.id.clone(), next.clone()))
            })
            .collect()
    }

    /// The sections reachable from the entry by following `next`, stopping at
    /// the first unknown or repeated id.
    pub fn chain(&self) -> Vec<&SectionId> {
        let mut out: Vec<&SectionId> = Vec::new();
        let mut cursor = self.section(&self.entry);
        while let Some(section) = cursor {
            if out.contains(&&section.id) {
                break;
            }
            out.push(&section.id);
            cursor = section.next.as_ref().and_then(|n| self.section(n));
        }
        out
    }
}

/// Builder for [`FormDefinition`].
#[derive(Debug, Clone)]
pub struct FormBuilder {
    name: String,
    entry: SectionId,
    sections: Vec<Section>,
    questions: Vec<Question>,
    rules: HashMap<SectionId, AdvanceRule>,
    dependents: HashMap<QuestionId, Vec<QuestionId>>,
}

impl FormBuilder {
    /// Add a section.
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Add a question definition. Later definitions with the same id win.
    pub fn question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Add several question definitions.
    pub fn questions(mut self, questions: impl IntoIterator<Item = Question>) -> Self {
        self.questions.extend(questions);
        self
    }

    /// Replace the generic required-answers rule for one section.
    pub fn rule(mut self, section: impl Into<SectionId>, rule: AdvanceRule) -> Self {
        self.rules.insert(section.into(), rule);
        self
    }

    /// Declare that writing `parent` invalidates the answers to `children`.
    pub fn depends_on<Q: Into<QuestionId>>(
        mut self,
        parent: impl Into<QuestionId>,
        children: impl IntoIterator<Item = Q>,
    ) -> Self {
        let entry = self.dependents.entry(parent.into()).or_default();
        for child in children {
            let child = child.into();
            if !entry.contains(&child) {
                entry.push(child);
            }
        }
        self
    }

    /// Finish the form.
    ///
    /// Fails if the entry section is missing or a section id is repeated.
    /// Dangling `next` references are logged but accepted; advancing into one
    /// reports a navigation error at runtime.
    pub fn build(mut self) -> Result<FormDefinition, FormError> {
        let mut ids = HashSet::new();
        for section in &self.sections {
            if !ids.insert(&section.id) {
                return Err(FormError::DuplicateSection(section.id.clone()));
            }
        }
        if !ids.contains(&self.entry) {
            return Err(FormError::UnknownEntry(self.entry));
        }

        let implied: Vec<(QuestionId, QuestionId)> = self
            .questions
            .iter()
            .filter_map(|q| Some((q.depends_on()?.clone(), q.id().clone())))
            .collect();
        for (parent, child) in implied {
            self = self.depends_on(parent, [child]);
        }

        let form = FormDefinition {
            name: self.name,
            entry: self.entry,
            sections: self.sections,
            questions: self
                .questions
                .into_iter()
                .map(|q| (q.id().clone(), q))
                .collect(),
            rules: self.rules,
            dependents: self.dependents,
        };

        for (from, target) in form.dangling_references() {
            tracing::warn!(
                form = %form.name,
                %from,
                %target,
                "section leads to an undefined section"
            );
        }

        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legaldraft_types::{OptionSource, QuestionKind};

    fn two_step() -> FormBuilder {
        FormDefinition::builder("test", "a")
            .section(Section::new("a", "A").with_questions(["q1"]).then("b"))
            .section(Section::new("b", "B"))
            .question(Question::text("q1", "Q1"))
    }

    #[test]
    fn builds_and_looks_up() {
        let form = two_step().build().unwrap();
        assert_eq!(form.name(), "test");
        assert_eq!(form.entry(), "a");
        assert!(form.section(&"b".into()).is_some());
        assert!(form.question(&"q1".into()).is_some());
        assert!(matches!(form.rule(&"a".into()), AdvanceRule::RequiredAnswers));
    }

    #[test]
    fn missing_entry_is_rejected() {
        let err = FormDefinition::builder("test", "nope")
            .section(Section::new("a", "A"))
            .build()
            .unwrap_err();
        assert_eq!(err, FormError::UnknownEntry("nope".into()));
    }

    #[test]
    fn duplicate_sections_are_rejected() {
        let err = two_step().section(Section::new("a", "Again")).build().unwrap_err();
        assert_eq!(err, FormError::DuplicateSection("a".into()));
    }

    #[test]
    fn dangling_next_is_reported_not_rejected() {
        let form = FormDefinition::builder("test", "a")
            .section(Section::new("a", "A").then("ghost"))
            .build()
            .unwrap();
        assert_eq!(
            form.dangling_references(),
            vec![(SectionId::new("a"), SectionId::new("ghost"))]
        );
    }

    #[test]
    fn country_cascade_is_predeclared() {
        let form = two_step().build().unwrap();
        let mut deps = form.dependents_of(&"country".into());
        deps.sort();
        assert_eq!(deps, vec!["governing_state", "notary_state", "state"]);
    }

    #[test]
    fn derived_selects_add_implicit_edges() {
        let form = two_step()
            .question(Question::text("region", "Region"))
            .question(Question::new(
                "district",
                "District",
                QuestionKind::Select(OptionSource::StatesOf("region".into())),
            ))
            .depends_on("district", ["ward"])
            .build()
            .unwrap();
        let mut deps = form.dependents_of(&"region".into());
        deps.sort();
        assert_eq!(deps, vec!["district", "ward"]);
    }

    #[test]
    fn chain_follows_next_links() {
        let form = two_step().build().unwrap();
        assert_eq!(form.chain(), vec!["a", "b"]);
    }
}
