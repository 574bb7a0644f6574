//! PDF backend for legaldraft: fills a [`DocumentTemplate`] from an
//! [`AnswerSnapshot`](legaldraft::AnswerSnapshot) and flows the text onto
//! paginated PDF pages.
//!
//! ```ignore
//! let renderer = DocumentRenderer::new(template);
//! if let Some(artifact) = renderer.generate(&wizard.snapshot(), &notifier) {
//!     artifact.write_to(".")?;
//! }
//! ```

mod canvas;
mod error;
mod flow;
mod layout;
mod pdf;
mod render;
mod template;
mod wrap;

pub use canvas::{Canvas, PlacedText, Weight};
pub use error::RenderError;
pub use layout::PageLayout;
pub use pdf::PdfCanvas;
pub use render::{Artifact, DocumentRenderer, PDF_MIME};
pub use template::{Body, DocSection, DocumentTemplate, NONE_SENTINEL};
pub use wrap::wrap;
