//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::types::DiffReport;
use crate::policy::VersionBump;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    /// Render the report document as terminal text.
    #[must_use]
    pub fn generate(&self, report: &DiffReport) -> String {
        let mut lines = Vec::new();

        lines.push(self.color("Context Pack Diff", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        lines.push(format!(
            "{}  {} ({} → {})",
            self.color("Pack:", "cyan"),
            report.pack,
            report.base_version,
            report.head_version
        ));
        lines.push(format!(
            "{}  {} ({})",
            self.color("Recommended:", "cyan"),
            report.recommended_version,
            report.increment_type
        ));

        lines.push(String::new());

        if report.total_changes() == 0 {
            lines.push(self.color("No changes detected", "green"));
            return lines.join("\n");
        }

        lines.push(self.color("Changes:", "bold"));
        if report.summary.breaking > 0 {
            lines.push(format!(
                "  {} breaking",
                self.color(&report.summary.breaking.to_string(), "red")
            ));
        }
        if report.summary.additive > 0 {
            lines.push(format!(
                "  {} additive",
                self.color(&report.summary.additive.to_string(), "green")
            ));
        }
        if report.summary.corrective > 0 {
            lines.push(format!(
                "  {} corrective",
                self.color(&report.summary.corrective.to_string(), "yellow")
            ));
        }

        if !report.breaking.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Breaking changes:", "red"));
            for entry in &report.breaking {
                lines.push(format!(
                    "  [{}] {} {}",
                    entry.code,
                    self.color(&entry.section, "dim"),
                    entry.description
                ));
                if !entry.migration.is_empty() {
                    lines.push(format!("        migration: {}", entry.migration));
                }
            }
        }

        for (title, entries) in [
            ("Additive changes:", &report.additive),
            ("Corrective changes:", &report.corrective),
        ] {
            if entries.is_empty() {
                continue;
            }
            lines.push(String::new());
            lines.push(self.color(title, "bold"));
            for entry in entries {
                lines.push(format!(
                    "  [{}] {} {}",
                    entry.code,
                    self.color(&entry.section, "dim"),
                    entry.description
                ));
            }
        }

        if report.increment_type == VersionBump::Major {
            lines.push(String::new());
            lines.push(self.color(
                "Consumers must be updated before adopting the head pack",
                "yellow",
            ));
        }

        lines.join("\n")
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{Change, ChangeLog, DiffResult};

    fn report(changes: ChangeLog) -> DiffReport {
        DiffReport::from_result(&DiffResult {
            pack_name: "checkout".to_string(),
            base_version: "1.0.0".to_string(),
            head_version: "1.1.0".to_string(),
            changes: changes.into_changes(),
        })
    }

    #[test]
    fn test_empty_diff_summary() {
        let output = SummaryReporter::new().no_color().generate(&report(ChangeLog::new()));
        assert!(output.contains("No changes detected"));
        assert!(output.contains("checkout (1.0.0 → 1.1.0)"));
        assert!(output.contains("1.0.0 (NONE)"));
    }

    #[test]
    fn test_breaking_summary_lists_migration() {
        let mut log = ChangeLog::new();
        log.push(
            Change::breaking("states.review", "State removed: review")
                .with_migration("Remove all content referencing 'review' state"),
        );
        let output = SummaryReporter::new().no_color().generate(&report(log));
        assert!(output.contains("[BREAK-001]"));
        assert!(output.contains("migration: Remove all content referencing 'review' state"));
        assert!(output.contains("2.0.0 (MAJOR)"));
        assert!(output.contains("Consumers must be updated"));
    }

    #[test]
    fn test_no_color_output_has_no_escapes() {
        let mut log = ChangeLog::new();
        log.push(Change::additive("user_goals", "Added to user_goals: export"));
        let output = SummaryReporter::new().no_color().generate(&report(log));
        assert!(!output.contains('\x1b'));
    }
}
