use crate::{ChoiceOption, Question};

/// Trait for input collaborators that render questions and collect raw responses.
///
/// The engine decides which question comes next and assembles repeating
/// responses; a backend only turns one prompt into one string. It may enforce
/// the `required` marker (e.g. by re-prompting on empty input), but the engine
/// never does.
pub trait QuestionnaireBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Collect a line of free text for `question`.
    fn ask_text(&self, question: &Question) -> Result<String, Self::Error>;

    /// Present `choices` for `question` and return the selected option's value.
    ///
    /// Membership is not checked by the engine: whatever value is returned is recorded.
    fn ask_choice(&self, question: &Question, choices: &[ChoiceOption])
    -> Result<String, Self::Error>;

    /// Show an informational message (prelude, epilogue, repeating group header).
    ///
    /// The default implementation shows nothing.
    fn show_message(&self, _message: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<B: QuestionnaireBackend + ?Sized> QuestionnaireBackend for &B {
    type Error = B::Error;

    fn ask_text(&self, question: &Question) -> Result<String, Self::Error> {
        (**self).ask_text(question)
    }

    fn ask_choice(
        &self,
        question: &Question,
        choices: &[ChoiceOption],
    ) -> Result<String, Self::Error> {
        (**self).ask_choice(question, choices)
    }

    fn show_message(&self, message: &str) -> Result<(), Self::Error> {
        (**self).show_message(message)
    }
}
