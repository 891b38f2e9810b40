//! The immutable text value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable piece of text.
///
/// Concatenation produces a new value; existing values are never mutated,
/// which is what lets formatters fold over their elements repeatedly
/// without side effects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Text(String);

impl Text {
    /// The empty text value, the identity for [`concat`](Self::concat).
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a new value holding `self` followed by `other`.
    pub fn concat(&self, other: &Text) -> Text {
        let mut combined = String::with_capacity(self.0.len() + other.0.len());
        combined.push_str(&self.0);
        combined.push_str(&other.0);
        Self(combined)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Text {
    fn from(content: &str) -> Self {
        Self(content.to_owned())
    }
}

impl From<String> for Text {
    fn from(content: String) -> Self {
        Self(content)
    }
}

/// Anything that can render itself as a [`Text`] value.
pub trait TextRepresentable {
    fn to_text(&self) -> Text;
}

impl TextRepresentable for Text {
    fn to_text(&self) -> Text {
        self.clone()
    }
}
