//! Pipeline orchestration for pack diff operations.
//!
//! Shared orchestration logic for the parse → diff → report workflow used
//! by the CLI command handler.

mod output;
mod parse;

pub use output::{should_use_color, write_output, OutputTarget};
pub use parse::parse_pack_with_context;

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success, no breaking changes detected (or --no-fail-on-breaking)
    pub const SUCCESS: i32 = 0;
    /// Breaking changes were detected
    pub const BREAKING_CHANGES: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}
