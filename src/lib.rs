//! **A library for semantic diffing of feature context packs.**
//!
//! `pack-tools` compares two versions of a context pack, the YAML or JSON
//! document that describes a product feature for content generation
//! (conversation states, vocabulary, user goals, core actions, and an error
//! taxonomy), and classifies every difference by its impact on downstream
//! content. It powers both a command-line interface for CI pipelines and a
//! Rust library for programmatic integration.
//!
//! ## Key Features
//!
//! - **Format detection**: Ingests YAML or JSON packs, detecting the
//!   encoding from the content itself.
//! - **Semantic classification**: Every change is categorized as breaking,
//!   additive, or corrective based on what it means for content built
//!   against the pack, not on raw text distance.
//! - **Edit heuristics**: Text edits are distinguished as typo fixes,
//!   clarifications, or meaning changes using positional and keyword-overlap
//!   analysis.
//! - **Version recommendation**: The highest-impact change drives a semver
//!   bump recommendation for the next pack release.
//! - **Reporting**: Structured JSON for release tooling, or a compact
//!   terminal summary.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: Defines [`ContextPack`], the normalized document every
//!   parser produces and every differ consumes.
//! - **[`parsers`]**: Loads packs from files or strings with format
//!   detection.
//! - **[`diff`]**: Home of the [`PackDiffEngine`], which compares two packs
//!   section by section and assigns stable change codes.
//! - **[`matching`]**: The text edit classifier shared by the section
//!   differs.
//! - **[`policy`]**: Maps a change categorization to a recommended version.
//! - **[`reports`]**: JSON and summary report generators.
//! - **[`pipeline`]**: Orchestration helpers and CI exit codes used by the
//!   CLI.
//!
//! ## Getting Started: Diffing Two Packs
//!
//! ```no_run
//! use std::path::Path;
//! use pack_tools::{parse_pack, PackDiffEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let base = parse_pack(Path::new("packs/checkout-1.2.0.yaml"))?;
//!     let head = parse_pack(Path::new("packs/checkout-next.yaml"))?;
//!
//!     let result = PackDiffEngine::new().diff(&base, &head);
//!
//!     for change in &result.changes {
//!         println!("[{}] {}: {}", change.code, change.section, change.description);
//!     }
//!     println!("Recommended version: {}", result.recommended_version());
//!
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // # Errors / # Panics doc sections are not maintained for every fallible fn
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `base`/`head` or `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod matching;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod policy;
pub mod reports;

// Convenience re-exports for the common library entry points
pub use diff::{DiffResult, PackDiffEngine};
pub use error::{PackDiffError, Result};
pub use model::ContextPack;
pub use parsers::{parse_pack, parse_pack_str};
pub use policy::{recommend_version, VersionBump};
pub use reports::DiffReport;
