//! # questionnaire
//!
//! A conditional questionnaire engine. Backend-agnostic.
//!
//! Questions are asked in order, except where conditions say otherwise:
//! - display conditions hide a question unless earlier answers match
//! - skip conditions hide a question when an earlier answer matches
//! - branch conditions jump to a named question after a matching answer
//!
//! ## Usage
//!
//! ```rust,ignore
//! use questionnaire::{ChoiceOption, Question, Questionnaire, QuestionnaireDefinition, Runner};
//!
//! let definition = QuestionnaireDefinition::new(vec![
//!     Question::single_choice(
//!         "q1",
//!         "What is your favourite colour?",
//!         vec![ChoiceOption::new("q1a", "Blue"), ChoiceOption::new("q1c", "Yellow")],
//!     )
//!     .jump_to("q4", "Yellow"),
//!     Question::free_text("q2", "What colour blue do you prefer?").display_when("q1", "Blue"),
//!     Question::yes_no("q4", "Do you have a crayon in this colour?"),
//! ]);
//!
//! let mut questionnaire = Questionnaire::new(definition)?;
//! let answers = Runner::new(&mut questionnaire).run(&backend)?;
//! ```
//!
//! ## Backends
//!
//! Backends are separate crates that implement `QuestionnaireBackend`:
//! - `questionnaire-dialoguer` - CLI prompts via dialoguer
//!
//! `TestBackend` answers from canned responses for tests.

// Re-export all types from questionnaire-types
pub use questionnaire_types::*;

mod config;
pub use config::{load_definition, parse_definition};

mod questionnaire;
pub use questionnaire::Questionnaire;

mod runner;
pub use runner::Runner;

mod validate;
pub use validate::validate;

// Test backend for running questionnaires without user interaction
mod test_backend;
pub use test_backend::{TestBackend, TestBackendError};
