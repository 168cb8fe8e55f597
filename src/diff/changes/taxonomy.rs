//! Keyed-list differ for the `error_taxonomy` section.

use super::json_value;
use crate::diff::log::ChangeLog;
use crate::diff::result::Change;
use crate::matching::{classify_text, EditClass};
use crate::model::ErrorSpec;
use indexmap::IndexMap;

/// Diff the error taxonomies of two packs.
///
/// Both sides are indexed by `code` first; a duplicated code keeps the last
/// record, matching how consumers resolve such lists. Within a matched code
/// only `message_pattern` is compared, and message wording never escalates
/// beyond corrective: integrations key on the code, not the text.
pub fn diff_error_taxonomy(base: &[ErrorSpec], head: &[ErrorSpec], log: &mut ChangeLog) {
    let base_by_code = index_by_code(base);
    let head_by_code = index_by_code(head);

    for (code, spec) in base_by_code
        .iter()
        .filter(|(k, _)| !head_by_code.contains_key(*k))
    {
        log.push(
            Change::breaking(
                format!("error_taxonomy.{code}"),
                format!("Error code removed: {code}"),
            )
            .with_base_value(json_value(spec))
            .with_migration(format!("Update error handling for '{code}'")),
        );
    }

    for (code, spec) in head_by_code
        .iter()
        .filter(|(k, _)| !base_by_code.contains_key(*k))
    {
        log.push(
            Change::additive(
                format!("error_taxonomy.{code}"),
                format!("Error code added: {code}"),
            )
            .with_head_value(json_value(spec)),
        );
    }

    for (code, base_err) in &base_by_code {
        let Some(head_err) = head_by_code.get(code) else {
            continue;
        };
        if base_err == head_err {
            continue;
        }

        let old_msg = base_err.message_pattern.as_deref().unwrap_or_default();
        let new_msg = head_err.message_pattern.as_deref().unwrap_or_default();
        if old_msg == new_msg {
            continue;
        }

        let section = format!("error_taxonomy.{code}.message_pattern");
        let description = if classify_text(old_msg, new_msg) == EditClass::TypoFix {
            format!("Error message typo fixed: {code}")
        } else {
            format!("Error message updated: {code}")
        };
        log.push(
            Change::corrective(section, description)
                .with_base_value(serde_json::Value::String(old_msg.to_string()))
                .with_head_value(serde_json::Value::String(new_msg.to_string())),
        );
    }
}

fn index_by_code(taxonomy: &[ErrorSpec]) -> IndexMap<&str, &ErrorSpec> {
    taxonomy.iter().map(|e| (e.code.as_str(), e)).collect()
}
