//! # questionnaire-dialoguer
//!
//! Dialoguer console backend for the questionnaire engine.
//!
//! Questions are presented one at a time in a classic CLI wizard style:
//! free-text questions as line input, single-choice and yes/no questions as
//! a selection list. Required questions re-prompt until the answer is non-empty.
//!
//! ## Example
//!
//! ```rust,ignore
//! use questionnaire::{Question, Questionnaire, QuestionnaireDefinition, Runner};
//! use questionnaire_dialoguer::DialoguerBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let definition = QuestionnaireDefinition::new(vec![
//!         Question::free_text("q5", "What is your name?").required(),
//!     ]);
//!     let mut questionnaire = Questionnaire::new(definition)?;
//!     let answers = Runner::new(&mut questionnaire).run(&DialoguerBackend::new())?;
//!     println!("{answers:#?}");
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerBackend, DialoguerError};
