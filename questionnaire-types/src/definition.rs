use serde::{Deserialize, Serialize};

use crate::Question;

/// The static description of a questionnaire: its ordered questions and messages.
///
/// Question order is the default traversal order. The same question may be
/// listed at more than one position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireDefinition {
    /// Optional message shown before the first question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prelude: Option<String>,

    /// All questions, in sequence.
    #[serde(default)]
    pub questions: Vec<Question>,

    /// Optional message shown after the questionnaire completes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epilogue: Option<String>,
}

impl QuestionnaireDefinition {
    /// Create a new definition with the given questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            prelude: None,
            questions,
            epilogue: None,
        }
    }

    /// Set the prelude message.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Set the epilogue message.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Check if the questionnaire has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of positions in the sequence.
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}
