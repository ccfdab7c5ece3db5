use serde::{Deserialize, Serialize};

/// A single response value collected for a question.
///
/// Free-text and choice-like questions produce `Text`; repeating questions
/// produce a `List` of their children's responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    /// A raw string (typed text or the selected option's value).
    Text(String),

    /// The collected responses of a repeating question, sentinel excluded.
    List(Vec<ResponseValue>),
}

impl ResponseValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::List(_) => None,
        }
    }

    /// Try to get this value as a list.
    pub fn as_list(&self) -> Option<&[ResponseValue]> {
        match self {
            Self::List(items) => Some(items),
            Self::Text(_) => None,
        }
    }

    /// Check if this is a text value equal to `text`.
    pub fn is_text(&self, text: &str) -> bool {
        self.as_str() == Some(text)
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::List(_) => "List",
        }
    }
}

impl From<String> for ResponseValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ResponseValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<ResponseValue>> for ResponseValue {
    fn from(items: Vec<ResponseValue>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for ResponseValue {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(Self::from).collect())
    }
}
