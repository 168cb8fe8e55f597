//! Ordered-set differ for the `user_goals` and `core_actions` sections.

use crate::diff::log::ChangeLog;
use crate::diff::result::Change;
use indexmap::IndexSet;

/// How the removal of a list item is classified.
///
/// Both list sections in a context pack use the breaking default; the
/// corrective option exists for sections where removal is low-impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalImpact {
    #[default]
    Breaking,
    Corrective,
}

/// Diff a free-text list section as an unordered set of strings.
///
/// Items are atomic, so there is no modification case: an item is either in
/// both sets, or added, or removed. Duplicates collapse; item order is
/// ignored for membership but preserved for deterministic reporting.
pub fn diff_string_set(
    section: &str,
    base: &[String],
    head: &[String],
    removal: RemovalImpact,
    log: &mut ChangeLog,
) {
    let base_set: IndexSet<&str> = base.iter().map(String::as_str).collect();
    let head_set: IndexSet<&str> = head.iter().map(String::as_str).collect();

    for item in base_set.difference(&head_set) {
        let description = format!("Removed from {section}: {item}");
        let change = match removal {
            RemovalImpact::Breaking => Change::breaking(section, description)
                .with_migration(format!("Remove references to '{item}'")),
            RemovalImpact::Corrective => Change::corrective(section, description),
        };
        log.push(change.with_base_value(serde_json::Value::String((*item).to_string())));
    }

    for item in head_set.difference(&base_set) {
        log.push(
            Change::additive(section, format!("Added to {section}: {item}"))
                .with_head_value(serde_json::Value::String((*item).to_string())),
        );
    }
}
