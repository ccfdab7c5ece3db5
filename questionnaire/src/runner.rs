//! Drives a questionnaire to completion through a backend.

use questionnaire_types::{Answers, QuestionnaireBackend, QuestionnaireError};
use tracing::debug;

use crate::Questionnaire;

/// Asks the current question, records the answer and advances, until completion.
///
/// Owns nothing but the borrow of its questionnaire.
pub struct Runner<'q> {
    questionnaire: &'q mut Questionnaire,
}

impl<'q> Runner<'q> {
    pub fn new(questionnaire: &'q mut Questionnaire) -> Self {
        Self { questionnaire }
    }

    /// Run the questionnaire and return the final answers.
    ///
    /// Shows the prelude and epilogue through the backend when the definition
    /// has them. Backend errors abort the run without retry.
    pub fn run<B>(self, backend: &B) -> Result<&'q Answers, QuestionnaireError>
    where
        B: QuestionnaireBackend + ?Sized,
    {
        let questionnaire = self.questionnaire;

        if let Some(prelude) = &questionnaire.definition().prelude {
            backend.show_message(prelude).map_err(backend_error)?;
        }

        questionnaire.start()?;

        while let Some(question) = questionnaire.current() {
            debug!(question = %question.reference(), "asking");
            let response = question.ask(backend).map_err(backend_error)?;
            questionnaire.record(response.clone());
            questionnaire.next(&response)?;
        }

        if let Some(epilogue) = &questionnaire.definition().epilogue {
            backend.show_message(epilogue).map_err(backend_error)?;
        }

        let questionnaire: &'q Questionnaire = questionnaire;
        Ok(questionnaire.answers())
    }
}

/// Wrap a backend error, unwrapping it if the backend already speaks `QuestionnaireError`.
fn backend_error(err: impl Into<anyhow::Error>) -> QuestionnaireError {
    match err.into().downcast::<QuestionnaireError>() {
        Ok(err) => err,
        Err(err) => QuestionnaireError::backend(err),
    }
}
