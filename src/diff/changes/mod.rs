//! Section differ implementations.
//!
//! One differ per section shape: a keyed-map differ for states and
//! vocabulary, an ordered-set differ for the goal/action lists, and a
//! keyed-list differ for the error taxonomy. The differs are mutually
//! independent; each appends its changes to the shared [`ChangeLog`].
//!
//! [`ChangeLog`]: crate::diff::ChangeLog

mod lists;
mod states;
mod taxonomy;
mod vocabulary;

pub use lists::{diff_string_set, RemovalImpact};
pub use states::diff_states;
pub use taxonomy::diff_error_taxonomy;
pub use vocabulary::diff_vocabulary;

/// Serialize a document fragment for inclusion in a change record.
///
/// Serialization of model types cannot realistically fail; if it ever does,
/// the change carries `null` rather than aborting the diff.
pub(crate) fn json_value<T: serde::Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}
