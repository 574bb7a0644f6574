//! Document templates and placeholder interpolation.

use legaldraft::{
    AnswerSnapshot, ChoiceOption, ContactSlot, EmergencyContact, ListName, QuestionId,
    RepeatedEntry,
};

/// Answer value that marks a conditional section as explicitly declined.
pub const NONE_SENTINEL: &str = ChoiceOption::NONE_VALUE;

/// A document type: a title and an ordered list of sections.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentTemplate {
    doc_type: String,
    title: String,
    sections: Vec<DocSection>,
}

impl DocumentTemplate {
    /// Create an empty template. `doc_type` becomes the filename prefix.
    pub fn new(doc_type: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            doc_type: doc_type.into(),
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Append a section.
    pub fn section(mut self, section: DocSection) -> Self {
        self.sections.push(section);
        self
    }

    pub fn doc_type(&self) -> &str {
        &self.doc_type
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sections(&self) -> &[DocSection] {
        &self.sections
    }
}

/// One headed block of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocSection {
    pub heading: String,
    pub body: Body,

    /// Questions that must all be answered (and not `"none"`) for this
    /// section to appear. Empty means always shown.
    pub required: Vec<QuestionId>,
}

impl DocSection {
    /// A section whose body is one narrative template.
    pub fn narrative(heading: impl Into<String>, template: impl Into<String>) -> Self {
        Self::with_body(heading, Body::Narrative(template.into()))
    }

    /// A section that enumerates the entries of a repeated list.
    pub fn entries(heading: impl Into<String>, list: ListName, item: impl Into<String>) -> Self {
        Self::with_body(
            heading,
            Body::Entries {
                list,
                item: item.into(),
            },
        )
    }

    /// A section that lists the primary and secondary emergency contacts.
    pub fn contacts(heading: impl Into<String>, item: impl Into<String>) -> Self {
        Self::with_body(heading, Body::Contacts { item: item.into() })
    }

    pub fn with_body(heading: impl Into<String>, body: Body) -> Self {
        Self {
            heading: heading.into(),
            body,
            required: Vec::new(),
        }
    }

    /// Only include this section when `question` is answered and not `"none"`.
    pub fn when_answered(mut self, question: impl Into<QuestionId>) -> Self {
        self.required.push(question.into());
        self
    }

    /// Whether this section appears for the given answers.
    pub fn is_included(&self, snapshot: &AnswerSnapshot) -> bool {
        self.required.iter().all(|q| {
            snapshot
                .answers
                .get(q)
                .map(str::trim)
                .is_some_and(|v| !v.is_empty() && !v.eq_ignore_ascii_case(NONE_SENTINEL))
        })
    }
}

/// What a section's body is made of.
///
/// Templates reference values as `{question_id}`. Entry and contact templates
/// may also reference the record's own fields and `{n}`, its 1-based position.
/// Every template may use `{document_date}`.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Narrative(String),
    Entries { list: ListName, item: String },
    Contacts { item: String },
}

/// Resolves `{key}` tokens for one template instance.
pub(crate) struct Scope<'a> {
    pub snapshot: &'a AnswerSnapshot,
    pub document_date: &'a str,
    pub record: Record<'a>,
}

pub(crate) enum Record<'a> {
    None,
    Entry {
        list: ListName,
        n: usize,
        entry: &'a RepeatedEntry,
    },
    Contact {
        slot: ContactSlot,
        contact: &'a EmergencyContact,
    },
}

impl Scope<'_> {
    /// The value for `key`. A record's own fields never fall back to answers
    /// of the same name, so a blank field stays blank.
    fn lookup(&self, key: &str) -> Option<String> {
        if key == "document_date" {
            return Some(self.document_date.to_string());
        }
        match &self.record {
            Record::None => {}
            Record::Entry { list, n, entry } => {
                if key == "n" {
                    return Some(n.to_string());
                }
                if list.fields().contains(&key) || entry.iter().any(|(field, _)| field == key) {
                    return non_blank(entry.get(key));
                }
            }
            Record::Contact { slot, contact } => match key {
                "n" => {
                    return Some(match slot {
                        ContactSlot::Primary => "1".to_string(),
                        ContactSlot::Secondary => "2".to_string(),
                    });
                }
                "slot" => {
                    return Some(match slot {
                        ContactSlot::Primary => "Primary".to_string(),
                        ContactSlot::Secondary => "Secondary".to_string(),
                    });
                }
                "name" => return non_blank(&contact.name),
                "phone" => return non_blank(&contact.phone),
                "email" => return non_blank(&contact.email),
                _ => {}
            },
        }
        self.snapshot.display(key).map(str::to_string)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Replace every `{key}` in `template` with its value, or `placeholder` when
/// the value is missing. Braces that do not enclose a plain key are copied
/// through unchanged.
pub(crate) fn fill(template: &str, scope: &Scope<'_>, placeholder: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if is_key(&after[..close]) => {
                let key = &after[..close];
                match scope.lookup(key) {
                    Some(value) => out.push_str(&value),
                    None => out.push_str(placeholder),
                }
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn is_key(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}
