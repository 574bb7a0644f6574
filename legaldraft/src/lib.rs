//! # legaldraft
//!
//! Multi-step forms that collect the answers for a legal document.
//!
//! A form is a chain of sections; each section groups a few questions and
//! decides through its [`AdvanceRule`] whether the user may move on. A
//! [`WizardSession`] records answers, repeated entries (children, parents,
//! caretakers), emergency contacts and the navigation history. When the form
//! is complete, [`WizardSession::snapshot`] hands a read-only
//! [`AnswerSnapshot`] to a document renderer.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use legaldraft::{FormDefinition, Question, Section, WizardSession};
//!
//! let form = FormDefinition::builder("affidavit", "affiant")
//!     .section(Section::new("affiant", "Affiant").with_questions(["affiant_name"]))
//!     .question(Question::text("affiant_name", "Your full legal name"))
//!     .build()?;
//!
//! let mut session = WizardSession::new(&form);
//! session.set_answer(&form, "affiant_name", "Jane Roe");
//! session.advance(&form)?;
//! let snapshot = session.snapshot();
//! ```
//!
//! ## Renderers
//!
//! - `legaldraft-doc-pdf` - paginated PDF documents from an `AnswerSnapshot`

// Re-export all types from legaldraft-types
pub use legaldraft_types::*;

// Re-export the wizard engine
pub use legaldraft_wizard::*;

// In-memory collaborators for driving forms without a UI
pub mod testing;
