//! Core types for the questionnaire crate.
//!
//! This crate provides the foundational types for defining questionnaires:
//! - `QuestionnaireDefinition` - The ordered question sequence and its messages
//! - `Question` and `QuestionKind` - Individual questions and their kinds
//! - `Condition` and `BranchCondition` - Display, skip and jump rules
//! - `Answers` and `Reference` - Collected data keyed by question reference
//! - `QuestionnaireBackend` trait - For implementing input collaborators

mod reference;
pub use reference::Reference;

mod response_value;
pub use response_value::ResponseValue;

mod answers;
pub use answers::{AnswerError, Answers};

mod condition;
pub use condition::{BranchCondition, Condition};

mod question;
pub use question::{
    ChoiceOption, DEFAULT_SENTINEL, Question, QuestionKind, RepeatingQuestion,
    SingleChoiceQuestion,
};

mod definition;
pub use definition::QuestionnaireDefinition;

mod error;
pub use error::{ConfigError, QuestionnaireError};

mod ask;

mod traits;
pub use traits::QuestionnaireBackend;
