//! The normalized context pack document model.

use super::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Fallback used wherever a pack omits its name or version.
pub const UNKNOWN: &str = "unknown";

/// Feature metadata carried at the top of a context pack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureMeta {
    /// Feature name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Semantic version of the pack ("unknown" when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A named UI/flow state with its writing guidance fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_guidance: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_handling: Option<FieldValue>,
}

impl StateSpec {
    /// The compared sub-fields, in report order.
    pub const FIELDS: [&'static str; 4] = ["entry", "exit", "content_guidance", "error_handling"];

    /// Look up a compared sub-field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        match name {
            "entry" => self.entry.as_ref(),
            "exit" => self.exit.as_ref(),
            "content_guidance" => self.content_guidance.as_ref(),
            "error_handling" => self.error_handling.as_ref(),
            _ => None,
        }
    }
}

/// One entry of the error taxonomy, keyed by its `code`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorSpec {
    /// Stable error code integrations key on
    #[serde(default)]
    pub code: String,
    /// User-facing message pattern for this error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_pattern: Option<String>,
    /// Auxiliary fields (severity, recovery guidance, ...), preserved as-is
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

/// An immutable context pack snapshot.
///
/// Sections keep their document order (`IndexMap`), which makes diff output
/// and change-code assignment deterministic. A section whose value has the
/// wrong container shape deserializes to empty instead of failing the whole
/// document; the differs then report everything on the other side as
/// added/removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextPack {
    #[serde(default, deserialize_with = "lenient")]
    pub feature: FeatureMeta,
    #[serde(default, deserialize_with = "lenient")]
    pub states: IndexMap<String, StateSpec>,
    #[serde(default, deserialize_with = "lenient")]
    pub vocabulary: IndexMap<String, FieldValue>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_goals: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub core_actions: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub error_taxonomy: Vec<ErrorSpec>,
}

impl ContextPack {
    /// Feature name, or `"unknown"`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.feature.name.as_deref().unwrap_or(UNKNOWN)
    }

    /// Declared version, or `"unknown"`.
    #[must_use]
    pub fn version(&self) -> &str {
        self.feature.version.as_deref().unwrap_or(UNKNOWN)
    }
}

/// Deserialize a section, falling back to its default on shape mismatch.
///
/// Buffers the raw value first so a `states: [a, b]` (sequence where a map is
/// expected) degrades to an empty section instead of aborting the document.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_defaults() {
        let pack: ContextPack = serde_json::from_str("{}").unwrap();
        assert_eq!(pack.name(), UNKNOWN);
        assert_eq!(pack.version(), UNKNOWN);
        assert!(pack.states.is_empty());
        assert!(pack.error_taxonomy.is_empty());
    }

    #[test]
    fn test_state_fields_by_name() {
        let spec = StateSpec {
            entry: Some("user lands here".into()),
            ..StateSpec::default()
        };
        assert_eq!(spec.field("entry").and_then(FieldValue::as_text), Some("user lands here"));
        assert_eq!(spec.field("exit"), None);
        assert_eq!(spec.field("nonexistent"), None);
    }

    #[test]
    fn test_wrong_section_shape_degrades_to_empty() {
        let pack: ContextPack =
            serde_json::from_str(r#"{"states": ["draft", "review"], "user_goals": {"a": 1}}"#)
                .unwrap();
        assert!(pack.states.is_empty());
        assert!(pack.user_goals.is_empty());
    }

    #[test]
    fn test_section_order_preserved() {
        let pack: ContextPack = serde_json::from_str(
            r#"{"states": {"zeta": {}, "alpha": {}, "mid": {}}}"#,
        )
        .unwrap();
        let order: Vec<&String> = pack.states.keys().collect();
        assert_eq!(order, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_error_spec_keeps_extra_fields() {
        let spec: ErrorSpec = serde_json::from_str(
            r#"{"code": "E001", "message_pattern": "Try again", "severity": "high"}"#,
        )
        .unwrap();
        assert_eq!(spec.code, "E001");
        assert_eq!(spec.extra.get("severity"), Some(&serde_json::json!("high")));
    }
}
