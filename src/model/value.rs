//! Tagged field values for context pack documents.

use serde::{Deserialize, Serialize};

/// A scalar value carried by a document field.
///
/// Context pack fields are free text in the common case, but authors sometimes
/// put numbers in them (timeouts, limits). The differs and the similarity
/// classifier pattern-match on the variant; a field that is missing entirely
/// is represented as `Option::None` at the field site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free-text content
    Text(String),
    /// Numeric content
    Number(f64),
}

impl FieldValue {
    /// The text content, if this value is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// Whether this value is text.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&FieldValue> for serde_json::Value {
    fn from(value: &FieldValue) -> Self {
        match value {
            FieldValue::Text(s) => Self::String(s.clone()),
            FieldValue::Number(n) => serde_json::Number::from_f64(*n)
                .map_or(Self::Null, Self::Number),
        }
    }
}
