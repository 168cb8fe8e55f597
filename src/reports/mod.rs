//! Report generation for diff results.
//!
//! Two output formats are supported:
//! - JSON: the stable structured contract for release tooling
//! - Summary: compact shell-friendly output
//!
//! Both render the same [`DiffReport`] document, which is built once from a
//! [`DiffResult`](crate::diff::DiffResult) and carries the version
//! recommendation alongside the categorized changes.

mod json;
mod summary;
mod types;

pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::{BreakingEntry, ChangeEntry, ChangeSummary, DiffReport, ReportFormat};
