//! Test backend for running questionnaires without user interaction.
//!
//! `TestBackend` answers each question from a queue of canned responses keyed
//! by reference, and remembers which questions it was asked. Repeating
//! questions pull successive responses from their child's queue.
//!
//! # Example
//!
//! ```rust
//! use questionnaire::{Question, Questionnaire, QuestionnaireDefinition, Runner, TestBackend};
//!
//! let definition = QuestionnaireDefinition::new(vec![
//!     Question::free_text("q5", "What is your name?"),
//!     Question::repeating(
//!         "q7",
//!         "What are the names of your children?",
//!         vec![Question::free_text("q7_1", "Name? (q to quit)")],
//!     ),
//! ]);
//! let mut questionnaire = Questionnaire::new(definition).unwrap();
//!
//! let backend = TestBackend::new()
//!     .with_response("q5", "Ada")
//!     .with_responses("q7_1", ["Alice", "Bob", "q"]);
//!
//! let answers = Runner::new(&mut questionnaire).run(&backend).unwrap();
//! assert_eq!(answers.get_text("q5").unwrap(), "Ada");
//! assert_eq!(answers.get_list("q7").unwrap().len(), 2);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use crate::{ChoiceOption, Question, QuestionnaireBackend, Reference};

/// A test backend that returns pre-configured responses.
#[derive(Debug, Clone, Default)]
pub struct TestBackend {
    responses: RefCell<HashMap<Reference, VecDeque<String>>>,
    asked: RefCell<Vec<Reference>>,
    messages: RefCell<Vec<String>>,
}

/// Error type for TestBackend.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    #[error("Missing response for question: {0}")]
    MissingResponse(Reference),
}

impl TestBackend {
    /// Create a new empty test backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for a question.
    ///
    /// Queuing several responses for the same reference answers it that many times.
    pub fn with_response(self, reference: impl Into<Reference>, value: impl Into<String>) -> Self {
        self.responses
            .borrow_mut()
            .entry(reference.into())
            .or_default()
            .push_back(value.into());
        self
    }

    /// Queue several responses for a question, in order.
    pub fn with_responses<I, S>(mut self, reference: impl Into<Reference>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let reference = reference.into();
        for value in values {
            self = self.with_response(reference.clone(), value);
        }
        self
    }

    /// References of every question presented, in order, including repeats.
    pub fn asked(&self) -> Vec<Reference> {
        self.asked.borrow().clone()
    }

    /// Check if a question was ever presented.
    pub fn was_asked(&self, reference: &str) -> bool {
        self.asked.borrow().iter().any(|r| r.as_str() == reference)
    }

    /// Messages shown through `show_message`, in order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    fn respond(&self, question: &Question) -> Result<String, TestBackendError> {
        self.asked.borrow_mut().push(question.reference().clone());
        self.responses
            .borrow_mut()
            .get_mut(question.reference().as_str())
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| TestBackendError::MissingResponse(question.reference().clone()))
    }
}

impl QuestionnaireBackend for TestBackend {
    type Error = TestBackendError;

    fn ask_text(&self, question: &Question) -> Result<String, Self::Error> {
        self.respond(question)
    }

    fn ask_choice(
        &self,
        question: &Question,
        _choices: &[ChoiceOption],
    ) -> Result<String, Self::Error> {
        self.respond(question)
    }

    fn show_message(&self, message: &str) -> Result<(), Self::Error> {
        self.messages.borrow_mut().push(message.to_string());
        Ok(())
    }
}
