//! Fill-and-flow rendering of a template into a downloadable PDF.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use legaldraft::{AnswerSnapshot, ContactSlot, Notifier, RepeatedEntry};

use crate::flow::Flow;
use crate::template::{Record, Scope, fill};
use crate::{Body, Canvas, DocumentTemplate, PageLayout, PdfCanvas, RenderError, Weight};

/// MIME type of generated artifacts.
pub const PDF_MIME: &str = "application/pdf";

/// A generated document, ready to be saved or offered for download.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub filename: String,
    pub mime_type: &'static str,
    pub pages: usize,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Save the artifact under its own filename inside `dir`.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf, RenderError> {
        let path = dir.as_ref().join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Renders one document type from answer snapshots.
#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    template: DocumentTemplate,
    layout: PageLayout,
    page_limit: Option<usize>,
}

impl DocumentRenderer {
    /// Create a renderer with the default page layout.
    pub fn new(template: DocumentTemplate) -> Self {
        Self {
            template,
            layout: PageLayout::default(),
            page_limit: None,
        }
    }

    /// Use a different page layout.
    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Fail rendering instead of producing more than `limit` pages.
    pub fn with_page_limit(mut self, limit: usize) -> Self {
        self.page_limit = Some(limit);
        self
    }

    pub fn template(&self) -> &DocumentTemplate {
        &self.template
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// The artifact filename for a render at `at`: `<doc_type>_<YYYYMMDD>_<HHMMSS>.pdf`.
    pub fn filename(&self, at: NaiveDateTime) -> String {
        format!(
            "{}_{}.pdf",
            sanitize_file_stem(self.template.doc_type()),
            at.format("%Y%m%d_%H%M%S")
        )
    }

    /// Flow the document onto any canvas. Returns the number of pages used.
    ///
    /// The output depends only on `snapshot`, `at` and the layout. Missing
    /// answers are drawn as the layout's placeholder.
    pub fn render_to(
        &self,
        snapshot: &AnswerSnapshot,
        at: NaiveDateTime,
        canvas: &mut dyn Canvas,
    ) -> Result<usize, RenderError> {
        self.layout.validate()?;
        let document_date = at.format("%B %-d, %Y").to_string();
        let placeholder = self.layout.placeholder.as_str();
        let mut flow = Flow::start(&self.layout, canvas)?;

        flow.line(self.template.title(), Weight::Bold, self.layout.title_size)?;
        flow.skip(self.layout.section_spacing);

        for section in self.template.sections() {
            if !section.is_included(snapshot) {
                tracing::debug!(heading = %section.heading, "skipping conditional section");
                continue;
            }
            flow.line(&section.heading, Weight::Bold, self.layout.font_size)?;
            match &section.body {
                Body::Narrative(template) => {
                    let scope = Scope {
                        snapshot,
                        document_date: &document_date,
                        record: Record::None,
                    };
                    flow.paragraph(&fill(template, &scope, placeholder), Weight::Regular)?;
                }
                Body::Entries { list, item } => {
                    let blank = [RepeatedEntry::blank()];
                    let entries = match snapshot.entries(*list) {
                        [] => &blank[..],
                        entries => entries,
                    };
                    for (i, entry) in entries.iter().enumerate() {
                        let scope = Scope {
                            snapshot,
                            document_date: &document_date,
                            record: Record::Entry {
                                list: *list,
                                n: i + 1,
                                entry,
                            },
                        };
                        flow.paragraph(&fill(item, &scope, placeholder), Weight::Regular)?;
                    }
                }
                Body::Contacts { item } => {
                    for slot in [ContactSlot::Primary, ContactSlot::Secondary] {
                        let scope = Scope {
                            snapshot,
                            document_date: &document_date,
                            record: Record::Contact {
                                slot,
                                contact: snapshot.contacts.get(slot),
                            },
                        };
                        flow.paragraph(&fill(item, &scope, placeholder), Weight::Regular)?;
                    }
                }
            }
            flow.skip(self.layout.section_spacing);
        }

        drop(flow);
        Ok(canvas.page_count())
    }

    /// Render to PDF bytes.
    pub fn render(
        &self,
        snapshot: &AnswerSnapshot,
        at: NaiveDateTime,
    ) -> Result<Artifact, RenderError> {
        let mut canvas = PdfCanvas::new(&self.layout);
        if let Some(limit) = self.page_limit {
            canvas = canvas.with_page_limit(limit);
        }
        let pages = self.render_to(snapshot, at, &mut canvas)?;
        Ok(Artifact {
            filename: self.filename(at),
            mime_type: PDF_MIME,
            pages,
            bytes: canvas.to_bytes(),
        })
    }

    /// Render and report the outcome to `notifier`.
    ///
    /// Never fails: errors become an error notification and `None`.
    pub fn generate_at(
        &self,
        snapshot: &AnswerSnapshot,
        at: NaiveDateTime,
        notifier: &dyn Notifier,
    ) -> Option<Artifact> {
        match self.render(snapshot, at) {
            Ok(artifact) => {
                tracing::info!(
                    filename = %artifact.filename,
                    pages = artifact.pages,
                    bytes = artifact.bytes.len(),
                    "document generated"
                );
                notifier.notify_success(&format!("Generated {}", artifact.filename));
                Some(artifact)
            }
            Err(err) => {
                self.report_failure(&err, notifier);
                None
            }
        }
    }

    /// [`generate_at`](Self::generate_at) with the current local time.
    pub fn generate(&self, snapshot: &AnswerSnapshot, notifier: &dyn Notifier) -> Option<Artifact> {
        self.generate_at(snapshot, Local::now().naive_local(), notifier)
    }

    /// Render, save into `dir` and report the outcome.
    ///
    /// Nothing is written when rendering fails; a failed save yields `None`.
    pub fn generate_into(
        &self,
        snapshot: &AnswerSnapshot,
        dir: impl AsRef<Path>,
        notifier: &dyn Notifier,
    ) -> Option<Artifact> {
        let at = Local::now().naive_local();
        let artifact = match self.render(snapshot, at) {
            Ok(artifact) => artifact,
            Err(err) => {
                self.report_failure(&err, notifier);
                return None;
            }
        };
        match artifact.write_to(dir) {
            Ok(path) => {
                tracing::info!(path = %path.display(), pages = artifact.pages, "document saved");
                notifier.notify_success(&format!("Saved {}", artifact.filename));
                Some(artifact)
            }
            Err(err) => {
                tracing::warn!(
                    filename = %artifact.filename,
                    error = %err,
                    "saving document failed"
                );
                notifier.notify_error(&err.to_string());
                None
            }
        }
    }

    fn report_failure(&self, err: &RenderError, notifier: &dyn Notifier) {
        tracing::warn!(
            doc_type = self.template.doc_type(),
            error = %err,
            "document generation failed"
        );
        notifier.notify_error(&format!("Could not generate document: {err}"));
    }
}

/// Lowercase the document type and replace anything but ASCII letters and
/// digits with `_`.
fn sanitize_file_stem(s: &str) -> String {
    let stem: String = s
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            'A'..='Z' => c.to_ascii_lowercase(),
            _ => '_',
        })
        .collect();
    if stem.is_empty() {
        "document".to_string()
    } else {
        stem
    }
}
