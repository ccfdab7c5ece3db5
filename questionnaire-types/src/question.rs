use serde::{Deserialize, Serialize};

use crate::{BranchCondition, Condition, Reference, ResponseValue};

/// The response that ends collection for a repeating question's child.
pub const DEFAULT_SENTINEL: &str = "q";

/// A single question in a questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// The key under which this question's answer is stored.
    reference: Reference,

    /// The prompt text shown to the operator.
    prompt: String,

    /// The kind of question (determines response shape and nested structure).
    #[serde(flatten)]
    kind: QuestionKind,

    /// Marker for the input collaborator; the engine never enforces it.
    #[serde(default)]
    required: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    display_conditions: Vec<Condition>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    skip_conditions: Vec<Condition>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    branch_conditions: Vec<BranchCondition>,
}

impl Question {
    /// Create a new question.
    pub fn new(
        reference: impl Into<Reference>,
        prompt: impl Into<String>,
        kind: QuestionKind,
    ) -> Self {
        Self {
            reference: reference.into(),
            prompt: prompt.into(),
            kind,
            required: false,
            display_conditions: Vec::new(),
            skip_conditions: Vec::new(),
            branch_conditions: Vec::new(),
        }
    }

    /// Create a free-text question.
    pub fn free_text(reference: impl Into<Reference>, prompt: impl Into<String>) -> Self {
        Self::new(reference, prompt, QuestionKind::FreeText)
    }

    /// Create a single-choice question.
    pub fn single_choice(
        reference: impl Into<Reference>,
        prompt: impl Into<String>,
        choices: Vec<ChoiceOption>,
    ) -> Self {
        Self::new(
            reference,
            prompt,
            QuestionKind::SingleChoice(SingleChoiceQuestion::new(choices)),
        )
    }

    /// Create a yes/no question.
    pub fn yes_no(reference: impl Into<Reference>, prompt: impl Into<String>) -> Self {
        Self::new(reference, prompt, QuestionKind::YesNo)
    }

    /// Create a repeating question that asks each child until the default sentinel.
    pub fn repeating(
        reference: impl Into<Reference>,
        prompt: impl Into<String>,
        children: Vec<Question>,
    ) -> Self {
        Self::new(
            reference,
            prompt,
            QuestionKind::Repeating(RepeatingQuestion::new(children)),
        )
    }

    /// Mark the question as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Only show this question if `trigger` was answered with `state`.
    pub fn display_when(
        mut self,
        trigger: impl Into<Reference>,
        state: impl Into<ResponseValue>,
    ) -> Self {
        self.display_conditions.push(Condition::new(trigger, state));
        self
    }

    /// Bypass this question if `trigger` was answered with `state`.
    pub fn skip_when(
        mut self,
        trigger: impl Into<Reference>,
        state: impl Into<ResponseValue>,
    ) -> Self {
        self.skip_conditions.push(Condition::new(trigger, state));
        self
    }

    /// Continue at `target` when this question is answered with `state`.
    pub fn jump_to(
        mut self,
        target: impl Into<Reference>,
        state: impl Into<ResponseValue>,
    ) -> Self {
        let trigger = self.reference.clone();
        self.branch_conditions
            .push(BranchCondition::new(target, trigger, state));
        self
    }

    /// Attach an explicit branch condition.
    pub fn with_branch(mut self, branch: BranchCondition) -> Self {
        self.branch_conditions.push(branch);
        self
    }

    /// Get the question's reference.
    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Check if the question carries the required marker.
    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn display_conditions(&self) -> &[Condition] {
        &self.display_conditions
    }

    pub fn skip_conditions(&self) -> &[Condition] {
        &self.skip_conditions
    }

    pub fn branch_conditions(&self) -> &[BranchCondition] {
        &self.branch_conditions
    }

    /// Get the options offered by a choice-like question.
    ///
    /// Yes/no questions offer `<reference>y` = "Yes" and `<reference>n` = "No".
    /// Other kinds offer nothing.
    pub fn choices(&self) -> Vec<ChoiceOption> {
        match &self.kind {
            QuestionKind::SingleChoice(single) => single.choices.clone(),
            QuestionKind::YesNo => vec![
                ChoiceOption::new(self.reference.suffixed("y"), "Yes"),
                ChoiceOption::new(self.reference.suffixed("n"), "No"),
            ],
            QuestionKind::FreeText | QuestionKind::Repeating(_) => Vec::new(),
        }
    }
}

/// The kind of question, determining the response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Raw text input.
    FreeText,

    /// Pick one option; the response is the option's value.
    SingleChoice(SingleChoiceQuestion),

    /// A single choice between "Yes" and "No".
    YesNo,

    /// Ask nested questions repeatedly; the response is a list.
    Repeating(RepeatingQuestion),
}

/// One selectable value of a choice-like question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub reference: Reference,

    /// The value shown to the operator and recorded as the response.
    pub value: String,

    /// Optional secondary display text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ChoiceOption {
    /// Create a new option without a label.
    pub fn new(reference: impl Into<Reference>, value: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            value: value.into(),
            label: None,
        }
    }

    /// Set the secondary display text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Text to show for this option, including the label when present.
    pub fn display(&self) -> String {
        match &self.label {
            Some(label) => format!("{} ({label})", self.value),
            None => self.value.clone(),
        }
    }
}

/// Configuration for a single-choice question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SingleChoiceQuestion {
    /// The available options, in display order.
    pub choices: Vec<ChoiceOption>,
}

impl SingleChoiceQuestion {
    pub fn new(choices: Vec<ChoiceOption>) -> Self {
        Self { choices }
    }
}

/// Configuration for a repeating question.
///
/// Each child is asked again and again until it returns the sentinel,
/// then the next child is asked the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatingQuestion {
    pub children: Vec<Question>,

    /// The response that ends collection for the current child.
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
}

fn default_sentinel() -> String {
    DEFAULT_SENTINEL.to_string()
}

impl RepeatingQuestion {
    /// Create a repeating question with the default sentinel.
    pub fn new(children: Vec<Question>) -> Self {
        Self {
            children,
            sentinel: default_sentinel(),
        }
    }

    /// Use a custom sentinel.
    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    /// Get the children.
    pub fn children(&self) -> &[Question] {
        &self.children
    }
}
