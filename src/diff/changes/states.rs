//! Keyed-map differ for the `states` section.

use super::json_value;
use crate::diff::log::ChangeLog;
use crate::diff::result::Change;
use crate::matching::{classify, EditClass};
use crate::model::{FieldValue, StateSpec};
use indexmap::IndexMap;

/// Diff the states of two packs.
///
/// Removed states are breaking, added states are additive; for states
/// present on both sides the compared sub-fields are diffed individually.
/// Iteration follows document order on each side, keeping change codes
/// deterministic.
pub fn diff_states(
    base: &IndexMap<String, StateSpec>,
    head: &IndexMap<String, StateSpec>,
    log: &mut ChangeLog,
) {
    for (name, spec) in base.iter().filter(|(k, _)| !head.contains_key(*k)) {
        log.push(
            Change::breaking(format!("states.{name}"), format!("State removed: {name}"))
                .with_base_value(json_value(spec))
                .with_migration(format!("Remove all content referencing '{name}' state")),
        );
    }

    for (name, spec) in head.iter().filter(|(k, _)| !base.contains_key(*k)) {
        log.push(
            Change::additive(format!("states.{name}"), format!("State added: {name}"))
                .with_head_value(json_value(spec)),
        );
    }

    for (name, base_spec) in base {
        let Some(head_spec) = head.get(name) else {
            continue;
        };
        if base_spec == head_spec {
            continue;
        }
        for field in StateSpec::FIELDS {
            diff_state_field(name, field, base_spec.field(field), head_spec.field(field), log);
        }
    }
}

/// Diff one sub-field of a state present on both sides.
///
/// The nil-transition rule runs before similarity classification: a field
/// appearing only in head is additive, a field disappearing is breaking.
fn diff_state_field(
    state: &str,
    field: &str,
    old: Option<&FieldValue>,
    new: Option<&FieldValue>,
    log: &mut ChangeLog,
) {
    if old == new {
        return;
    }
    let section = format!("states.{state}.{field}");

    match (old, new) {
        (None, Some(new)) => log.push(
            Change::additive(section, format!("Field added to state {state}: {field}"))
                .with_head_value(new.into()),
        ),
        (Some(old), None) => log.push(
            Change::breaking(section, format!("Field removed from state {state}: {field}"))
                .with_base_value(old.into())
                .with_migration(format!("Update content that depends on {field}")),
        ),
        (Some(old), Some(new)) => {
            let change = match classify(old, new) {
                EditClass::TypoFix => {
                    Change::corrective(section, format!("Typo fixed in {state}.{field}"))
                }
                EditClass::Clarification => {
                    Change::corrective(section, format!("Clarification in {state}.{field}"))
                }
                EditClass::MeaningChange => {
                    Change::breaking(section, format!("Meaning changed in {state}.{field}"))
                        .with_migration(format!("Review content using {state} state"))
                }
                EditClass::Unclassified => {
                    Change::corrective(section, format!("Updated {state}.{field}"))
                }
            };
            log.push(change.with_base_value(old.into()).with_head_value(new.into()));
        }
        (None, None) => {}
    }
}
