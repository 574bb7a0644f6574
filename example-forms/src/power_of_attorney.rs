use legaldraft::{
    AdvanceRule, FormDefinition, FormError, OptionSource, Question, QuestionKind, Section,
};
use legaldraft_doc_pdf::{DocSection, DocumentRenderer, DocumentTemplate};

pub const DOC_TYPE: &str = "power_of_attorney";

/// The kinds of authority a principal can grant.
pub const POWERS: [&str; 4] = ["General", "Limited", "Financial", "Healthcare"];

/// Power of attorney naming a single agent.
pub fn form() -> Result<FormDefinition, FormError> {
    FormDefinition::builder(DOC_TYPE, "location_selection")
        .section(
            Section::new("location_selection", "Governing Law")
                .with_questions(["country", "governing_state"])
                .then("principal"),
        )
        .section(
            Section::new("principal", "Principal")
                .with_questions(["principal_name", "principal_address"])
                .then("agent"),
        )
        .section(
            Section::new("agent", "Agent")
                .with_questions(["agent_name", "agent_address", "agent_phone", "agent_email"])
                .then("powers"),
        )
        .section(
            Section::new("powers", "Powers")
                .with_questions(["powers_granted", "effective_date", "durable", "limitations"])
                .then("notary"),
        )
        .section(Section::new("notary", "Notarization").with_questions(["notary_state"]))
        .questions([
            Question::new("country", "Country", QuestionKind::Select(OptionSource::Countries)),
            Question::new(
                "governing_state",
                "Governing state",
                QuestionKind::Select(OptionSource::StatesOf("country".into())),
            ),
            Question::text("principal_name", "Your full legal name"),
            Question::text("principal_address", "Your address"),
            Question::text("agent_name", "Agent's full legal name"),
            Question::text("agent_address", "Agent's address"),
            Question::new("agent_phone", "Agent's phone number", QuestionKind::Phone),
            Question::new("agent_email", "Agent's email address", QuestionKind::Email).optional(),
            Question::select("powers_granted", "Powers granted", POWERS),
            Question::date("effective_date", "Effective from"),
            Question::new(
                "durable",
                "Remains in effect if I become incapacitated",
                QuestionKind::Confirmation,
            )
            .optional(),
            Question::textarea("limitations", "Limitations on the agent's authority").optional(),
            Question::new(
                "notary_state",
                "State of notarization",
                QuestionKind::Select(OptionSource::StatesOf("country".into())),
            )
            .optional()
            .with_none_option(),
        ])
        .rule("notary", AdvanceRule::Always)
        .build()
}

pub fn template() -> DocumentTemplate {
    DocumentTemplate::new(DOC_TYPE, "Power of Attorney")
        .section(DocSection::narrative(
            "Designation of Agent",
            "I, {principal_name}, of {principal_address}, appoint {agent_name}, of \
             {agent_address}, telephone {agent_phone}, as my attorney-in-fact.",
        ))
        .section(DocSection::narrative(
            "Powers",
            "My agent may act for me with {powers_granted} authority beginning \
             {effective_date}. This power of attorney is governed by the laws of \
             {governing_state}, {country}.",
        ))
        .section(
            DocSection::narrative(
                "Durability",
                "This power of attorney is not affected by my subsequent incapacity.",
            )
            .when_answered("durable"),
        )
        .section(
            DocSection::narrative("Limitations", "{limitations}").when_answered("limitations"),
        )
        .section(DocSection::narrative(
            "Signatures",
            "Signed on {document_date}.\n\n______________________________\n\
             {principal_name}, Principal\n\n______________________________\n\
             {agent_name}, Agent",
        ))
        .section(
            DocSection::narrative(
                "Notary Acknowledgment",
                "State of {notary_state}. Acknowledged before me on {document_date} \
                 by {principal_name}.\n\n______________________________\nNotary Public",
            )
            .when_answered("notary_state"),
        )
}

pub fn renderer() -> DocumentRenderer {
    DocumentRenderer::new(template())
}
