//! Semantic diff engine for context packs.
//!
//! The engine compares two parsed [`ContextPack`] documents section by
//! section and classifies every difference as breaking, additive, or
//! corrective. Each section shape has its own differ in the [`changes`]
//! module; all of them append to a shared [`ChangeLog`] that assigns stable
//! sequential change codes. The differs are independent of each other and
//! run in a fixed order so that codes are deterministic.
//!
//! [`ContextPack`]: crate::model::ContextPack
//!
//! # Example
//!
//! ```
//! use pack_tools::{parse_pack_str, PackDiffEngine};
//!
//! let base = parse_pack_str(r#"{"feature": {"name": "checkout", "version": "1.2.0"}}"#)?;
//! let head = parse_pack_str(r#"{"feature": {"name": "checkout", "version": "1.2.0"}}"#)?;
//!
//! let result = PackDiffEngine::new().diff(&base, &head);
//! assert!(!result.has_changes());
//! # Ok::<(), pack_tools::PackDiffError>(())
//! ```

pub mod changes;
mod engine;
mod log;
mod result;

pub use changes::RemovalImpact;
pub use engine::{EngineConfig, PackDiffEngine};
pub use log::ChangeLog;
pub use result::{Change, ChangeType, DiffResult};
