use serde::{Deserialize, Serialize};

use crate::{Reference, ResponseValue};

/// A predicate over a single prior answer.
///
/// Used both as a display condition (the question is shown only if every
/// display condition holds) and as a skip condition (the question is bypassed
/// if any skip condition holds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// The question whose answer is tested.
    pub trigger: Reference,

    /// The answer that satisfies the condition.
    pub state: ResponseValue,
}

impl Condition {
    pub fn new(trigger: impl Into<Reference>, state: impl Into<ResponseValue>) -> Self {
        Self {
            trigger: trigger.into(),
            state: state.into(),
        }
    }

    /// Check the condition against the trigger's answer.
    pub fn is_met_by(&self, answer: &ResponseValue) -> bool {
        &self.state == answer
    }
}

/// A jump attached to the question that was just answered.
///
/// When the source question's response equals `state`, the questionnaire
/// continues at `target` instead of the next question in sequence.
/// `trigger` must name the source question itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchCondition {
    /// The question to continue at.
    pub target: Reference,

    /// The source question's own reference.
    pub trigger: Reference,

    /// The response that activates the jump.
    pub state: ResponseValue,
}

impl BranchCondition {
    pub fn new(
        target: impl Into<Reference>,
        trigger: impl Into<Reference>,
        state: impl Into<ResponseValue>,
    ) -> Self {
        Self {
            target: target.into(),
            trigger: trigger.into(),
            state: state.into(),
        }
    }

    /// Check whether this branch fires for `response` given by question `source`.
    pub fn fires(&self, source: &Reference, response: &ResponseValue) -> bool {
        &self.trigger == source && &self.state == response
    }
}
