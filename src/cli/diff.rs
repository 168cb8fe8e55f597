//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two context packs.

use crate::config::DiffConfig;
use crate::diff::{DiffResult, PackDiffEngine};
use crate::pipeline::{exit_codes, parse_pack_with_context, should_use_color, write_output, OutputTarget};
use crate::reports::{DiffReport, JsonReporter, ReportFormat, SummaryReporter};
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;

    let base = parse_pack_with_context(&config.paths.base, quiet)?;
    let head = parse_pack_with_context(&config.paths.head, quiet)?;

    let result = PackDiffEngine::with_config(config.engine).diff(&base, &head);

    if !quiet {
        tracing::info!(
            pack = result.pack_name,
            breaking = result.breaking().count(),
            additive = result.additive().count(),
            corrective = result.corrective().count(),
            "diff computed"
        );
    }

    let exit_code = determine_exit_code(&config, &result);

    let report = DiffReport::from_result(&result);
    let rendered = match config.output.format {
        ReportFormat::Json => JsonReporter::new().generate(&report)?,
        ReportFormat::Summary => {
            let reporter = if should_use_color(config.output.no_color) {
                SummaryReporter::new()
            } else {
                SummaryReporter::new().no_color()
            };
            reporter.generate(&report)
        }
    };

    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&rendered, &target, quiet)?;

    Ok(exit_code)
}

/// Determine the appropriate exit code based on diff results and config flags.
fn determine_exit_code(config: &DiffConfig, result: &DiffResult) -> i32 {
    if config.behavior.fail_on_breaking && result.has_breaking() {
        return exit_codes::BREAKING_CHANGES;
    }
    exit_codes::SUCCESS
}
