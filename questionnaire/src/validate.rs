//! Fail-fast checks on a question set before a run starts.

use std::collections::HashSet;

use questionnaire_types::{ConfigError, Question, QuestionKind, QuestionnaireDefinition};

/// Check that a definition is internally consistent.
///
/// Rejects empty references, single-choice questions without options,
/// repeating questions nested in repeating questions, children of repeating
/// questions that carry conditions, branches whose trigger
/// is not the owning question, and any branch target or condition trigger
/// that does not name a question in the sequence.
///
/// Whether a trigger is actually answered on the path taken can only be known
/// at run time; the engine reports that as `QuestionnaireError::UnansweredTrigger`.
pub fn validate(definition: &QuestionnaireDefinition) -> Result<(), ConfigError> {
    let known: HashSet<&str> = definition
        .questions()
        .iter()
        .map(|q| q.reference().as_str())
        .collect();

    for (position, question) in definition.questions().iter().enumerate() {
        validate_shape(question, position)?;

        for branch in question.branch_conditions() {
            if &branch.trigger != question.reference() {
                return Err(ConfigError::ForeignBranchTrigger {
                    question: question.reference().clone(),
                    trigger: branch.trigger.clone(),
                });
            }
            if !known.contains(branch.target.as_str()) {
                return Err(ConfigError::UnknownBranchTarget {
                    question: question.reference().clone(),
                    target: branch.target.clone(),
                });
            }
        }

        let conditions = question
            .display_conditions()
            .iter()
            .chain(question.skip_conditions());
        for condition in conditions {
            if !known.contains(condition.trigger.as_str()) {
                return Err(ConfigError::UnknownTrigger {
                    question: question.reference().clone(),
                    trigger: condition.trigger.clone(),
                });
            }
        }
    }

    Ok(())
}

fn validate_shape(question: &Question, position: usize) -> Result<(), ConfigError> {
    if question.reference().is_empty() {
        return Err(ConfigError::EmptyReference(position));
    }

    match question.kind() {
        QuestionKind::SingleChoice(single) if single.choices.is_empty() => {
            Err(ConfigError::NoChoices(question.reference().clone()))
        }
        QuestionKind::Repeating(repeating) => {
            for child in repeating.children() {
                if matches!(child.kind(), QuestionKind::Repeating(_)) {
                    return Err(ConfigError::NestedRepeating(question.reference().clone()));
                }
                // Children are asked as a group; their conditions would never be evaluated.
                if !child.display_conditions().is_empty()
                    || !child.skip_conditions().is_empty()
                    || !child.branch_conditions().is_empty()
                {
                    return Err(ConfigError::ChildConditions(child.reference().clone()));
                }
                validate_shape(child, position)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
