//! Configuration types for pack-tools.
//!
//! CLI arguments are resolved into these structures before any work starts,
//! so command handlers never look at raw flags.

use crate::diff::EngineConfig;
use crate::reports::ReportFormat;
use std::path::PathBuf;

/// Configuration for a diff operation
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Paths to compare
    pub paths: DiffPaths,
    /// Output configuration
    pub output: OutputConfig,
    /// Diff engine configuration
    pub engine: EngineConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

/// Paths for a diff operation
#[derive(Debug, Clone)]
pub struct DiffPaths {
    /// Path to the base (older) pack
    pub base: PathBuf,
    /// Path to the head (newer) pack
    pub head: PathBuf,
}

/// Output configuration
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Exit with code 1 when breaking changes are detected
    pub fail_on_breaking: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            fail_on_breaking: true,
            quiet: false,
        }
    }
}
