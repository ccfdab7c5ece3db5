use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The identifier of a question, e.g. `"q1"`.
///
/// Used as the key in `Answers` and as the trigger/target of conditions.
/// The same reference may appear at more than one position in a questionnaire;
/// the answer stored under it is then overwritten by the later position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reference(String);

impl Reference {
    /// Create a new reference.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Get the reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the reference is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Derive a new reference by appending a suffix, e.g. `q4` + `y` = `q4y`.
    pub fn suffixed(&self, suffix: &str) -> Self {
        Self(format!("{}{}", self.0, suffix))
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for Reference {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Reference {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Reference {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for Reference {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

impl From<&Reference> for Reference {
    fn from(r: &Reference) -> Self {
        r.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let reference = Reference::new("q1");
        assert_eq!(reference.as_str(), "q1");
    }

    #[test]
    fn suffixed() {
        let reference = Reference::new("q4").suffixed("y");
        assert_eq!(reference.as_str(), "q4y");
    }

    #[test]
    fn display() {
        let reference = Reference::new("q7_1");
        assert_eq!(format!("{}", reference), "q7_1");
    }

    #[test]
    fn borrow_as_str_for_map_lookup() {
        let mut map = std::collections::HashMap::new();
        map.insert(Reference::new("q1"), 1);
        assert_eq!(map.get("q1"), Some(&1));
    }
}
