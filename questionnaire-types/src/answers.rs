use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Reference, ResponseValue};

/// Error type for answer access operations.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Missing answer for question: {0}")]
    Missing(Reference),

    #[error("Type mismatch for question '{reference}': expected {expected}, got {actual}")]
    TypeMismatch {
        reference: Reference,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Answers collected during a questionnaire run.
///
/// Keyed by question reference. Entries are only ever inserted or overwritten,
/// never removed: a reference asked twice keeps the later answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    values: BTreeMap<Reference, ResponseValue>,
}

impl Answers {
    /// Create a new empty answer map.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Record an answer, replacing any earlier answer under the same reference.
    pub fn insert(&mut self, reference: impl Into<Reference>, value: impl Into<ResponseValue>) {
        self.values.insert(reference.into(), value.into());
    }

    /// Get the answer recorded for a question.
    pub fn get(&self, reference: &str) -> Option<&ResponseValue> {
        self.values.get(reference)
    }

    /// Check if an answer exists for a question.
    pub fn contains(&self, reference: &str) -> bool {
        self.values.contains_key(reference)
    }

    /// Get an iterator over all reference-value pairs, ordered by reference.
    pub fn iter(&self) -> impl Iterator<Item = (&Reference, &ResponseValue)> {
        self.values.iter()
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a text answer.
    pub fn get_text(&self, reference: &str) -> Result<&str, AnswerError> {
        match self.get(reference) {
            Some(ResponseValue::Text(s)) => Ok(s),
            Some(other) => Err(AnswerError::TypeMismatch {
                reference: reference.into(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(reference.into())),
        }
    }

    /// Get the collected responses of a repeating question.
    pub fn get_list(&self, reference: &str) -> Result<&[ResponseValue], AnswerError> {
        match self.get(reference) {
            Some(ResponseValue::List(items)) => Ok(items),
            Some(other) => Err(AnswerError::TypeMismatch {
                reference: reference.into(),
                expected: "List",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(reference.into())),
        }
    }
}

impl IntoIterator for Answers {
    type Item = (Reference, ResponseValue);
    type IntoIter = std::collections::btree_map::IntoIter<Reference, ResponseValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = (&'a Reference, &'a ResponseValue);
    type IntoIter = std::collections::btree_map::Iter<'a, Reference, ResponseValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
