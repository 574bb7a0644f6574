use legaldraft::{
    AdvanceRule, ContactField, ContactSlot, FormDefinition, FormError, ListName, OptionSource,
    Question, QuestionKind, Section,
};
use legaldraft_doc_pdf::{DocSection, DocumentRenderer, DocumentTemplate};

pub const DOC_TYPE: &str = "child_care_authorization";

/// Temporary care authorization for one or more children.
///
/// Location, parties, children, caretakers, terms, emergency contacts and an
/// optional notary block, in that order.
pub fn form() -> Result<FormDefinition, FormError> {
    FormDefinition::builder(DOC_TYPE, "location_selection")
        .section(
            Section::new("location_selection", "Location")
                .with_description("The laws of this state govern the authorization.")
                .with_questions(["country", "state"])
                .then("parties"),
        )
        .section(
            Section::new("parties", "Parent or Guardian")
                .with_questions(["parent_name", "parent_address", "parent_phone", "parent_email"])
                .then("children"),
        )
        .section(
            Section::new("children", "Children")
                .with_description("Add every child this authorization covers.")
                .with_questions(["children"])
                .then("caretakers"),
        )
        .section(
            Section::new("caretakers", "Caretakers")
                .with_questions(["caretakers"])
                .then("authorization"),
        )
        .section(
            Section::new("authorization", "Terms")
                .with_questions([
                    "start_date",
                    "end_date",
                    "medical_authority",
                    "special_instructions",
                ])
                .then("emergency_contacts"),
        )
        .section(
            Section::new("emergency_contacts", "Emergency Contacts")
                .with_questions(["emergency_contacts"])
                .then("notary"),
        )
        .section(
            Section::new("notary", "Notarization")
                .with_description("Choose \"None\" to sign without a notary.")
                .with_questions(["notary_state"]),
        )
        .questions([
            Question::new("country", "Country", QuestionKind::Select(OptionSource::Countries))
                .with_default_next("state"),
            Question::new(
                "state",
                "State",
                QuestionKind::Select(OptionSource::StatesOf("country".into())),
            ),
            Question::text("parent_name", "Your full legal name"),
            Question::text("parent_address", "Your address"),
            Question::new("parent_phone", "Your phone number", QuestionKind::Phone),
            Question::new("parent_email", "Your email address", QuestionKind::Email).optional(),
            Question::new(
                "children",
                "Children",
                QuestionKind::RepeatedGroup(ListName::Children),
            ),
            Question::new(
                "caretakers",
                "Caretakers",
                QuestionKind::RepeatedGroup(ListName::Caretakers),
            ),
            Question::date("start_date", "Authorization starts on"),
            Question::date("end_date", "Authorization ends on"),
            Question::new(
                "medical_authority",
                "May caretakers consent to medical treatment?",
                QuestionKind::Radio(vec!["Yes".into(), "No".into()]),
            ),
            Question::textarea("special_instructions", "Special instructions").optional(),
            Question::new(
                "emergency_contacts",
                "Emergency contacts",
                QuestionKind::EmergencyContacts,
            ),
            Question::new(
                "notary_state",
                "State of notarization",
                QuestionKind::Select(OptionSource::StatesOf("country".into())),
            )
            .optional()
            .with_none_option(),
        ])
        .rule("children", AdvanceRule::repeated_complete(ListName::Children))
        .rule("caretakers", AdvanceRule::repeated_complete(ListName::Caretakers))
        .rule(
            "emergency_contacts",
            AdvanceRule::ContactComplete {
                slot: ContactSlot::Primary,
                fields: vec![ContactField::Name, ContactField::Phone],
            },
        )
        .rule("notary", AdvanceRule::Always)
        .build()
}

pub fn template() -> DocumentTemplate {
    DocumentTemplate::new(DOC_TYPE, "Child Care Authorization")
        .section(DocSection::narrative(
            "Parties",
            "I, {parent_name}, residing at {parent_address}, telephone {parent_phone}, \
             am the parent or legal guardian of the children named below. This \
             authorization is governed by the laws of {state}, {country}.",
        ))
        .section(DocSection::entries(
            "Children",
            ListName::Children,
            "{n}. {full_name}, born {date_of_birth}",
        ))
        .section(DocSection::entries(
            "Authorized Caretakers",
            ListName::Caretakers,
            "{n}. {full_name} ({relationship}), {address}, telephone {phone}",
        ))
        .section(DocSection::narrative(
            "Authorization",
            "I authorize the caretakers named above to care for my children from \
             {start_date} until {end_date}. Authority to consent to medical \
             treatment: {medical_authority}.",
        ))
        .section(
            DocSection::narrative("Special Instructions", "{special_instructions}")
                .when_answered("special_instructions"),
        )
        .section(DocSection::contacts(
            "Emergency Contacts",
            "{slot}: {name}, telephone {phone}, email {email}",
        ))
        .section(DocSection::narrative(
            "Signature",
            "Signed on {document_date}.\n\n______________________________\n{parent_name}",
        ))
        .section(
            DocSection::narrative(
                "Notary Acknowledgment",
                "State of {notary_state}. Subscribed and sworn before me on \
                 {document_date} by {parent_name}.\n\n\
                 ______________________________\nNotary Public",
            )
            .when_answered("notary_state"),
        )
}

pub fn renderer() -> DocumentRenderer {
    DocumentRenderer::new(template())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_covers_every_section() {
        let form = form().unwrap();
        assert!(form.dangling_references().is_empty());
        assert_eq!(form.chain().len(), form.sections().len());
        assert_eq!(form.chain().last().map(|id| id.as_str()), Some("notary"));
    }

    #[test]
    fn notary_state_follows_country() {
        let form = form().unwrap();
        let deps = form.dependents_of(&"country".into());
        assert!(deps.iter().any(|d| d == "state"));
        assert!(deps.iter().any(|d| d == "notary_state"));
    }
}
