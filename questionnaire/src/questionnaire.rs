//! The questionnaire state machine.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use questionnaire_types::{
    Answers, ConfigError, Question, QuestionnaireDefinition, QuestionnaireError, Reference,
    ResponseValue,
};
use tracing::{debug, info, warn};

use crate::validate::validate;

/// A single questionnaire session: the question sequence, the cursor and the answers so far.
///
/// While the questionnaire is not completed, the cursor always points at a
/// question that should be asked. `next` is the only way to move it. A fatal
/// configuration error halts the session: nothing more is asked or recorded.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    definition: QuestionnaireDefinition,

    /// First position of every reference in the sequence.
    positions: HashMap<Reference, usize>,

    cursor: usize,
    answers: Answers,
    completed: bool,
    halted: bool,
}

impl Questionnaire {
    /// Create a questionnaire from a definition, rejecting inconsistent question sets.
    pub fn new(definition: QuestionnaireDefinition) -> Result<Self, ConfigError> {
        validate(&definition)?;

        let mut positions = HashMap::new();
        for (position, question) in definition.questions().iter().enumerate() {
            match positions.entry(question.reference().clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(position);
                }
                Entry::Occupied(entry) => {
                    debug!(
                        reference = %question.reference(),
                        first = *entry.get(),
                        position,
                        "question repeated; later answer replaces the earlier one"
                    );
                }
            }
        }

        Ok(Self {
            definition,
            positions,
            cursor: 0,
            answers: Answers::new(),
            completed: false,
            halted: false,
        })
    }

    /// Position the cursor on the first question that should be asked.
    ///
    /// An empty questionnaire completes immediately. Calling this on a completed
    /// or halted questionnaire does nothing.
    pub fn start(&mut self) -> Result<(), QuestionnaireError> {
        if self.completed || self.halted {
            return Ok(());
        }

        if self.definition.is_empty() {
            self.complete();
            return Ok(());
        }

        debug!(questions = self.definition.len(), "questionnaire started");
        self.settle(0)
    }

    /// The question to ask next, or `None` once completed or halted.
    pub fn current(&self) -> Option<&Question> {
        if self.completed || self.halted {
            None
        } else {
            self.definition.questions().get(self.cursor)
        }
    }

    /// The current position in the question sequence.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Check if a configuration error stopped the session.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn definition(&self) -> &QuestionnaireDefinition {
        &self.definition
    }

    /// The answers recorded so far.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Consume the questionnaire, returning the answers.
    pub fn into_answers(self) -> Answers {
        self.answers
    }

    /// Store `response` under the current question's reference.
    ///
    /// Recording does not move the cursor; call `next` afterwards.
    pub fn record(&mut self, response: impl Into<ResponseValue>) {
        let Some(question) = self.current() else {
            warn!("response recorded after completion or halt was ignored");
            return;
        };
        let reference = question.reference().clone();
        self.answers.insert(reference, response);
    }

    /// Record `response` for the current question and advance.
    pub fn submit(&mut self, response: impl Into<ResponseValue>) -> Result<(), QuestionnaireError> {
        let response = response.into();
        self.record(response.clone());
        self.next(&response)
    }

    /// Advance past the current question, given the response it just received.
    ///
    /// The first of the current question's branch conditions that fires moves
    /// the cursor straight to its target, without checking the target's display
    /// or skip conditions. Otherwise the cursor moves forward until it reaches a
    /// question whose display conditions all hold and whose skip conditions
    /// all fail; bypassed questions get no answer. Running past the last
    /// question completes the questionnaire, after which this does nothing.
    ///
    /// On a configuration error the cursor stays where it was and the
    /// questionnaire halts.
    pub fn next(&mut self, response: &ResponseValue) -> Result<(), QuestionnaireError> {
        if self.completed || self.halted {
            return Ok(());
        }
        if !self.has_next() {
            self.complete();
            return Ok(());
        }

        let jump = {
            let current = &self.definition.questions()[self.cursor];
            current
                .branch_conditions()
                .iter()
                .find(|branch| branch.fires(current.reference(), response))
                .map(|branch| (current.reference().clone(), branch.target.clone()))
        };

        if let Some((source, target)) = jump {
            let Some(index) = self.question_index(target.as_str()) else {
                return Err(self.halt(QuestionnaireError::UnknownTarget {
                    question: source,
                    target,
                }));
            };
            debug!(from = %source, to = %target, index, "branch taken");
            self.cursor = index;
            return Ok(());
        }

        self.settle(self.cursor + 1)
    }

    /// The first position of the question with the given reference.
    pub fn question_index(&self, reference: &str) -> Option<usize> {
        self.positions.get(reference).copied()
    }

    fn has_next(&self) -> bool {
        self.cursor + 1 < self.definition.len()
    }

    /// Move forward from `from` until a question should be shown, or complete.
    ///
    /// The cursor is only written once a position is settled.
    fn settle(&mut self, from: usize) -> Result<(), QuestionnaireError> {
        let mut candidate = from;
        loop {
            let question = &self.definition.questions()[candidate];
            match self.should_ask(question) {
                Ok(true) => {
                    debug!(question = %question.reference(), cursor = candidate, "next question");
                    self.cursor = candidate;
                    return Ok(());
                }
                Ok(false) => {
                    debug!(question = %question.reference(), "question bypassed");
                }
                Err(err) => return Err(self.halt(err)),
            }

            if candidate + 1 >= self.definition.len() {
                self.cursor = candidate;
                self.complete();
                return Ok(());
            }
            candidate += 1;
        }
    }

    fn halt(&mut self, err: QuestionnaireError) -> QuestionnaireError {
        warn!(error = %err, cursor = self.cursor, "questionnaire halted");
        self.halted = true;
        err
    }

    /// Every display condition must hold and no skip condition may hold.
    ///
    /// All conditions are looked up, so an unanswered trigger is always reported.
    fn should_ask(&self, question: &Question) -> Result<bool, QuestionnaireError> {
        let mut displayed = true;
        for condition in question.display_conditions() {
            displayed &= condition.is_met_by(self.lookup(question, &condition.trigger)?);
        }

        let mut skipped = false;
        for condition in question.skip_conditions() {
            skipped |= condition.is_met_by(self.lookup(question, &condition.trigger)?);
        }

        Ok(displayed && !skipped)
    }

    fn lookup(
        &self,
        question: &Question,
        trigger: &Reference,
    ) -> Result<&ResponseValue, QuestionnaireError> {
        self.answers
            .get(trigger.as_str())
            .ok_or_else(|| QuestionnaireError::UnansweredTrigger {
                question: question.reference().clone(),
                trigger: trigger.clone(),
            })
    }

    fn complete(&mut self) {
        self.completed = true;
        info!(answers = self.answers.len(), "questionnaire completed");
    }
}
