//! Option sets for choice questions, derived on demand from prior answers.

use legaldraft_types::{
    Answers, ChoiceOption, OptionSource, QuestionId, QuestionKind, RefItem, ReferenceData,
};

use crate::FormDefinition;

/// The options currently available for `question`.
///
/// Options derived from another answer (e.g. states of the chosen country) are
/// empty until that answer is present. Non-choice and unknown questions have
/// no options. Questions marked with a none option list [`ChoiceOption::none`]
/// first whenever they have any options at all. Nothing is cached; call again
/// after every answer change.
pub fn options_for(
    form: &FormDefinition,
    question: &QuestionId,
    answers: &Answers,
    reference: &dyn ReferenceData,
) -> Vec<ChoiceOption> {
    let Some(question) = form.question(question) else {
        return Vec::new();
    };
    let mut options = match question.kind() {
        QuestionKind::Select(OptionSource::Static(options)) | QuestionKind::Radio(options) => {
            options
                .iter()
                .map(|o| ChoiceOption::new(o.as_str(), o.as_str()))
                .collect()
        }
        QuestionKind::Select(OptionSource::Countries) => {
            to_options(reference.list_countries())
        }
        QuestionKind::Select(OptionSource::StatesOf(parent)) => {
            match answers.get(parent).map(str::trim).filter(|v| !v.is_empty()) {
                Some(country) => to_options(reference.list_states(country)),
                None => Vec::new(),
            }
        }
        _ => Vec::new(),
    };
    if question.offers_none() && !options.is_empty() {
        options.insert(0, ChoiceOption::none());
    }
    options
}

/// Display labels for every answered choice question whose value is listed
/// among its current options.
pub fn choice_labels(
    form: &FormDefinition,
    answers: &Answers,
    reference: &dyn ReferenceData,
) -> Answers {
    let mut labels = Answers::new();
    for (id, value) in answers.iter() {
        let is_choice = form.question(id).is_some_and(|q| q.kind().is_choice());
        if !is_choice {
            continue;
        }
        if let Some(option) = options_for(form, id, answers, reference)
            .into_iter()
            .find(|o| o.value == value)
        {
            labels.insert(id, option.label);
        }
    }
    labels
}

fn to_options(items: Vec<RefItem>) -> Vec<ChoiceOption> {
    items
        .into_iter()
        .map(|RefItem { id, name }| ChoiceOption { value: id, label: name })
        .collect()
}
