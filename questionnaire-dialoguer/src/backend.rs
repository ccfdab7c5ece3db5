//! Dialoguer backend implementation for QuestionnaireBackend trait.

use dialoguer::{Input, Select, theme::ColorfulTheme};
use questionnaire::{ChoiceOption, Question, QuestionnaireBackend};
use thiserror::Error;

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the questionnaire (e.g., pressed Ctrl+C or Escape).
    #[error("Questionnaire cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// A choice question was asked with nothing to choose from.
    #[error("Question '{0}' has no options to choose from")]
    NoChoices(String),
}

impl DialoguerError {
    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn map_error(err: dialoguer::Error) -> DialoguerError {
    if is_cancelled(&err) {
        DialoguerError::Cancelled
    } else {
        DialoguerError::Dialoguer(err)
    }
}

/// Dialoguer backend for interactive CLI prompts.
///
/// This backend uses the `dialoguer` library to present questions
/// to the operator in a command-line interface with colorful themes.
#[derive(Debug, Clone)]
pub struct DialoguerBackend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl Default for DialoguerBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerBackend {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    /// The prompt line, prefixed with the question reference.
    fn prompt(question: &Question) -> String {
        format!("{}: {}", question.reference(), question.prompt())
    }
}

impl QuestionnaireBackend for DialoguerBackend {
    type Error = DialoguerError;

    fn ask_text(&self, question: &Question) -> Result<String, Self::Error> {
        let prompt = Self::prompt(question);

        let _theme;
        let mut builder: Input<String>;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Input::with_theme(&_theme);
        } else {
            builder = Input::new();
        }

        // Enforcing the required marker is the collaborator's job, not the engine's.
        builder = builder
            .with_prompt(prompt)
            .allow_empty(!question.is_required());

        builder.interact_text().map_err(map_error)
    }

    fn ask_choice(
        &self,
        question: &Question,
        choices: &[ChoiceOption],
    ) -> Result<String, Self::Error> {
        if choices.is_empty() {
            return Err(DialoguerError::NoChoices(question.reference().to_string()));
        }

        let prompt = Self::prompt(question);
        let items: Vec<String> = choices.iter().map(ChoiceOption::display).collect();

        let _theme;
        let mut builder: Select;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }

        builder = builder.with_prompt(prompt).items(&items).default(0);

        let selection = builder.interact().map_err(map_error)?;
        Ok(choices[selection].value.clone())
    }

    fn show_message(&self, message: &str) -> Result<(), Self::Error> {
        println!("{message}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_creation() {
        let _backend = DialoguerBackend::new();
        let _plain = DialoguerBackend::plain();
    }

    #[test]
    fn default_is_colorful() {
        assert!(DialoguerBackend::default().colorful);
        assert!(!DialoguerBackend::plain().colorful);
    }

    #[test]
    fn error_types() {
        let err = DialoguerError::Cancelled;
        assert_eq!(err.to_string(), "Questionnaire cancelled by user");
        assert!(err.is_cancelled());

        let err = DialoguerError::NoChoices("q1".to_string());
        assert_eq!(err.to_string(), "Question 'q1' has no options to choose from");
    }

    #[test]
    fn prompt_includes_reference() {
        let question = Question::free_text("q5", "What is your name?");
        assert_eq!(DialoguerBackend::prompt(&question), "q5: What is your name?");
    }

    #[test]
    fn empty_choices_are_rejected_before_prompting() {
        let question = Question::single_choice("q1", "Colour?", vec![]);
        let err = DialoguerBackend::plain().ask_choice(&question, &[]).unwrap_err();
        assert!(matches!(err, DialoguerError::NoChoices(_)));
    }
}
