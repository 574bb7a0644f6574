//! # legaldraft-wizard
//!
//! The wizard engine behind legaldraft forms: a table of sections, each a step
//! holding a few questions, chained through `next` links.
//!
//! - [`FormDefinition`] is the immutable configuration, built with
//!   [`FormDefinition::builder`].
//! - [`WizardSession`] holds the answers, repeated entries and navigation
//!   history of one run. All transitions take the form by reference, and
//!   [`transition`] offers a pure `(session, event) -> session'` form.
//! - [`Wizard`] bundles a session with reference data and a notifier for UIs.
//!
//! ```rust,ignore
//! let form = FormDefinition::builder("nda", "parties")
//!     .section(Section::new("parties", "Parties").with_questions(["discloser"]))
//!     .question(Question::text("discloser", "Disclosing party"))
//!     .build()?;
//! let mut session = WizardSession::new(&form);
//! session.set_answer(&form, "discloser", "Acme Corp");
//! session.advance(&form)?;
//! assert!(session.is_complete());
//! ```

mod error;
pub use error::{FormError, WizardError};

mod form;
pub use form::{FormBuilder, FormDefinition};

mod rules;
pub use rules::AdvanceRule;

mod session;
pub use session::{Advance, WizardSession, WizardState};

mod event;
pub use event::{Event, transition};

mod options;
pub use options::{choice_labels, options_for};

mod notify;
pub use notify::TracingNotifier;

mod wizard;
pub use wizard::Wizard;
