use legaldraft::testing::{RecordingNotifier, StaticReferenceData};
use legaldraft::{
    AdvanceRule, Event, FormDefinition, ListName, NavigationError, Question, QuestionKind, Section,
    TracingNotifier, Wizard, WizardError, WizardSession, transition,
};

fn affidavit() -> anyhow::Result<FormDefinition> {
    Ok(FormDefinition::builder("affidavit", "affiant")
        .section(
            Section::new("affiant", "Affiant")
                .with_questions(["affiant_name", "affiant_email"])
                .then("dependents"),
        )
        .section(Section::new("dependents", "Dependents").with_questions(["children"]))
        .question(Question::text("affiant_name", "Your full legal name"))
        .question(Question::new("affiant_email", "Email", QuestionKind::Email).optional())
        .question(Question::new(
            "children",
            "Children",
            QuestionKind::RepeatedGroup(ListName::Children),
        ))
        .rule("dependents", AdvanceRule::repeated_complete(ListName::Children))
        .build()?)
}

#[test]
fn facade_exposes_the_whole_engine() -> anyhow::Result<()> {
    let form = affidavit()?;
    let mut session = WizardSession::new(&form);

    let err = session.advance(&form).unwrap_err();
    assert_eq!(err, NavigationError::SectionIncomplete("affiant".into()));

    session.set_answer(&form, "affiant_name", "Jane Roe");
    session.advance(&form)?;
    assert_eq!(session.current(), "dependents");

    let name = Event::update_entry(ListName::Children, 0, "full_name", "Kit");
    let next = transition(&form, &session, name)?;
    let born = Event::update_entry(ListName::Children, 0, "date_of_birth", "2020-01-01");
    let next = transition(&form, &next, born)?;
    let done = transition(&form, &next, Event::Advance)?;
    assert!(done.is_complete());
    assert!(!session.is_complete());

    let err = transition(&form, &done, Event::Advance).unwrap_err();
    assert!(err.is_navigation());
    assert!(matches!(err, WizardError::Navigation(NavigationError::AlreadyComplete)));
    Ok(())
}

#[test]
fn snapshot_round_trips_through_json() -> anyhow::Result<()> {
    let form = affidavit()?;
    let notifier = RecordingNotifier::new();
    let mut wizard = Wizard::new(form, StaticReferenceData::new(), &notifier);
    wizard.set_answer("affiant_name", "Jane Roe");
    wizard.update_entry(ListName::Children, 0, "full_name", "Kit");

    let snapshot = wizard.snapshot();
    let json = serde_json::to_string(&snapshot)?;
    let restored: legaldraft::AnswerSnapshot = serde_json::from_str(&json)?;
    assert_eq!(restored, snapshot);
    assert_eq!(restored.display("affiant_name"), Some("Jane Roe"));
    assert_eq!(restored.entries(ListName::Children)[0].get("full_name"), "Kit");
    Ok(())
}

#[test]
fn tracing_notifier_is_a_drop_in_sink() -> anyhow::Result<()> {
    let mut wizard = Wizard::new(affidavit()?, StaticReferenceData::new(), TracingNotifier);
    assert!(!wizard.advance());
    wizard.set_answer("affiant_name", "Jane Roe");
    assert!(wizard.advance());
    Ok(())
}
