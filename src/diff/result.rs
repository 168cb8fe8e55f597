//! Diff result structures.

use crate::policy::{recommend_version, VersionBump};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Classification of a single change, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    /// Consumers of the pack must react (removal, meaning change)
    Breaking,
    /// New content, existing consumers unaffected
    Additive,
    /// Cosmetic or clarifying edit
    Corrective,
}

impl ChangeType {
    /// Code prefix for this change type (`BREAK-001`, `ADD-001`, `CORR-001`).
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Breaking => "BREAK",
            Self::Additive => "ADD",
            Self::Corrective => "CORR",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breaking => "breaking",
            Self::Additive => "additive",
            Self::Corrective => "corrective",
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One classified change between two pack versions.
///
/// Constructed by the section differs without a code; the [`ChangeLog`]
/// assigns the stable sequential code when the change is recorded.
///
/// [`ChangeLog`]: crate::diff::ChangeLog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Change {
    /// Stable type-prefixed sequential code, e.g. `BREAK-003`
    pub code: String,
    /// Breaking, additive, or corrective
    pub change_type: ChangeType,
    /// Dotted section path, e.g. `states.login.entry`
    pub section: String,
    /// Human-readable description
    pub description: String,
    /// Value on the base side, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_value: Option<Value>,
    /// Value on the head side, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_value: Option<Value>,
    /// Migration hint, populated for breaking changes only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migration: Option<String>,
}

impl Change {
    fn new(change_type: ChangeType, section: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: String::new(),
            change_type,
            section: section.into(),
            description: description.into(),
            base_value: None,
            head_value: None,
            migration: None,
        }
    }

    /// Create an unregistered breaking change.
    pub fn breaking(section: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ChangeType::Breaking, section, description)
    }

    /// Create an unregistered additive change.
    pub fn additive(section: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ChangeType::Additive, section, description)
    }

    /// Create an unregistered corrective change.
    pub fn corrective(section: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ChangeType::Corrective, section, description)
    }

    /// Attach the base-side value.
    #[must_use]
    pub fn with_base_value(mut self, value: Value) -> Self {
        self.base_value = Some(value);
        self
    }

    /// Attach the head-side value.
    #[must_use]
    pub fn with_head_value(mut self, value: Value) -> Self {
        self.head_value = Some(value);
        self
    }

    /// Attach a migration hint.
    #[must_use]
    pub fn with_migration(mut self, migration: impl Into<String>) -> Self {
        self.migration = Some(migration.into());
        self
    }
}

/// Complete result of a context pack diff.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[must_use]
pub struct DiffResult {
    /// Name of the diffed pack (from the base document)
    pub pack_name: String,
    /// Version declared by the base document, or "unknown"
    pub base_version: String,
    /// Version declared by the head document, or "unknown"
    pub head_version: String,
    /// All changes, in differ run order
    pub changes: Vec<Change>,
}

impl DiffResult {
    fn by_type(&self, change_type: ChangeType) -> impl Iterator<Item = &Change> {
        self.changes
            .iter()
            .filter(move |c| c.change_type == change_type)
    }

    /// Breaking changes, as a view over the underlying change list.
    pub fn breaking(&self) -> impl Iterator<Item = &Change> {
        self.by_type(ChangeType::Breaking)
    }

    /// Additive changes.
    pub fn additive(&self) -> impl Iterator<Item = &Change> {
        self.by_type(ChangeType::Additive)
    }

    /// Corrective changes.
    pub fn corrective(&self) -> impl Iterator<Item = &Change> {
        self.by_type(ChangeType::Corrective)
    }

    /// Whether any breaking change was detected.
    #[must_use]
    pub fn has_breaking(&self) -> bool {
        self.breaking().next().is_some()
    }

    /// Whether the two documents differ at all.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// The semver bump implied by the detected changes.
    ///
    /// Strict priority: any breaking change forces Major regardless of how
    /// many additive or corrective changes exist.
    #[must_use]
    pub fn version_bump(&self) -> VersionBump {
        if self.has_breaking() {
            VersionBump::Major
        } else if self.additive().next().is_some() {
            VersionBump::Minor
        } else if self.corrective().next().is_some() {
            VersionBump::Patch
        } else {
            VersionBump::None
        }
    }

    /// The recommended next version, or `"unknown"` if the base version
    /// does not parse as semver.
    #[must_use]
    pub fn recommended_version(&self) -> String {
        recommend_version(&self.base_version, self.version_bump())
    }
}
