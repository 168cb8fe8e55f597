//! Context pack data model.
//!
//! Defines the central data structure, [`ContextPack`]. Regardless of the
//! input encoding (YAML or JSON), the loader parses a document into this
//! normalized model so that the diff engine works with one predictable shape.

mod pack;
mod value;

pub use pack::{ContextPack, ErrorSpec, FeatureMeta, StateSpec, UNKNOWN};
pub use value::FieldValue;
