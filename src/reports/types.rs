//! Report type definitions.

use crate::diff::{Change, DiffResult};
use crate::policy::VersionBump;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ReportFormat {
    /// Structured JSON output
    #[default]
    Json,
    /// Brief summary output for terminals
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Summary => write!(f, "summary"),
        }
    }
}

/// The stable report document produced for a diff.
///
/// This is the external contract consumed by release tooling; field names
/// and the per-category entry shapes are frozen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffReport {
    pub pack: String,
    pub base_version: String,
    pub head_version: String,
    pub recommended_version: String,
    pub increment_type: VersionBump,
    pub summary: ChangeSummary,
    pub breaking: Vec<BreakingEntry>,
    pub additive: Vec<ChangeEntry>,
    pub corrective: Vec<ChangeEntry>,
}

/// Per-category change counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSummary {
    pub breaking: usize,
    pub additive: usize,
    pub corrective: usize,
}

/// A breaking change entry. Migration guidance is always present, empty
/// when no specific guidance applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakingEntry {
    pub code: String,
    pub section: String,
    pub description: String,
    #[serde(default)]
    pub migration: String,
}

/// An additive or corrective change entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEntry {
    pub code: String,
    pub section: String,
    pub description: String,
}

impl DiffReport {
    /// Build the report document from a diff result.
    #[must_use]
    pub fn from_result(result: &DiffResult) -> Self {
        Self {
            pack: result.pack_name.clone(),
            base_version: result.base_version.clone(),
            head_version: result.head_version.clone(),
            recommended_version: result.recommended_version(),
            increment_type: result.version_bump(),
            summary: ChangeSummary {
                breaking: result.breaking().count(),
                additive: result.additive().count(),
                corrective: result.corrective().count(),
            },
            breaking: result.breaking().map(BreakingEntry::from_change).collect(),
            additive: result.additive().map(ChangeEntry::from_change).collect(),
            corrective: result.corrective().map(ChangeEntry::from_change).collect(),
        }
    }

    /// Total number of changes across all categories.
    #[must_use]
    pub fn total_changes(&self) -> usize {
        self.summary.breaking + self.summary.additive + self.summary.corrective
    }
}

impl BreakingEntry {
    fn from_change(change: &Change) -> Self {
        Self {
            code: change.code.clone(),
            section: change.section.clone(),
            description: change.description.clone(),
            migration: change.migration.clone().unwrap_or_default(),
        }
    }
}

impl ChangeEntry {
    fn from_change(change: &Change) -> Self {
        Self {
            code: change.code.clone(),
            section: change.section.clone(),
            description: change.description.clone(),
        }
    }
}
