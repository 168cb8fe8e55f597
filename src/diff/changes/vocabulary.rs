//! Keyed-map differ for the `vocabulary` section.

use crate::diff::log::ChangeLog;
use crate::diff::result::Change;
use crate::matching::{classify, EditClass};
use crate::model::FieldValue;
use indexmap::IndexMap;

/// Diff the vocabularies of two packs.
///
/// A term is atomic: the whole definition is classified in one step. Removed
/// terms are breaking (downstream content keys on terminology); changed
/// definitions go through the similarity classifier, with a meaning change
/// escalating to breaking.
pub fn diff_vocabulary(
    base: &IndexMap<String, FieldValue>,
    head: &IndexMap<String, FieldValue>,
    log: &mut ChangeLog,
) {
    for (term, definition) in base.iter().filter(|(k, _)| !head.contains_key(*k)) {
        log.push(
            Change::breaking(
                format!("vocabulary.{term}"),
                format!("Vocabulary term removed: {term}"),
            )
            .with_base_value(definition.into())
            .with_migration(format!("Replace all uses of '{term}' with new terminology")),
        );
    }

    for (term, definition) in head.iter().filter(|(k, _)| !base.contains_key(*k)) {
        log.push(
            Change::additive(
                format!("vocabulary.{term}"),
                format!("Vocabulary term added: {term}"),
            )
            .with_head_value(definition.into()),
        );
    }

    for (term, old) in base {
        let Some(new) = head.get(term) else {
            continue;
        };
        if old == new {
            continue;
        }
        let section = format!("vocabulary.{term}");

        let change = match classify(old, new) {
            EditClass::TypoFix => {
                Change::corrective(section, format!("Typo fixed in definition of '{term}'"))
            }
            EditClass::Clarification => {
                Change::corrective(section, format!("Definition clarified: {term}"))
            }
            EditClass::MeaningChange => {
                Change::breaking(section, format!("Definition meaning changed: {term}"))
                    .with_migration(format!("Review all content using '{term}'"))
            }
            EditClass::Unclassified => {
                Change::corrective(section, format!("Definition updated: {term}"))
            }
        };
        log.push(change.with_base_value(old.into()).with_head_value(new.into()));
    }
}
