use crate::Reference;

/// Error type for questionnaire runs.
#[derive(Debug, thiserror::Error)]
pub enum QuestionnaireError {
    /// Operator cancelled the run (Ctrl+C, closed input, etc.)
    #[error("Questionnaire cancelled by user")]
    Cancelled,

    /// Input collaborator failure (I/O, UI framework crash, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),

    /// The question set itself is invalid.
    #[error("Invalid questionnaire: {0}")]
    Config(#[from] ConfigError),

    /// A display or skip condition reads a question that has not been answered.
    #[error("Question '{question}' has a condition on '{trigger}', which has not been answered")]
    UnansweredTrigger {
        question: Reference,
        trigger: Reference,
    },

    /// A branch names a question that is not in the sequence.
    #[error("Question '{question}' branches to unknown question '{target}'")]
    UnknownTarget {
        question: Reference,
        target: Reference,
    },
}

impl QuestionnaireError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if this error stems from an invalid question set.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::UnansweredTrigger { .. } | Self::UnknownTarget { .. }
        )
    }
}

/// Error type for invalid question sets, detected before a run starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Question at position {0} has an empty reference")]
    EmptyReference(usize),

    #[error("Question '{question}' branches to unknown question '{target}'")]
    UnknownBranchTarget {
        question: Reference,
        target: Reference,
    },

    #[error("Question '{question}' has a branch triggered by '{trigger}' instead of itself")]
    ForeignBranchTrigger {
        question: Reference,
        trigger: Reference,
    },

    #[error("Question '{question}' has a condition on unknown question '{trigger}'")]
    UnknownTrigger {
        question: Reference,
        trigger: Reference,
    },

    #[error("Single-choice question '{0}' has no options")]
    NoChoices(Reference),

    #[error("Repeating question '{0}' contains another repeating question")]
    NestedRepeating(Reference),

    #[error("Question '{0}' is asked inside a repeating question and cannot carry conditions")]
    ChildConditions(Reference),

    #[error("Failed to parse questionnaire definition: {0}")]
    Parse(String),

    #[error("Failed to read questionnaire definition: {0}")]
    Io(#[from] std::io::Error),
}
