//! Context pack loaders.
//!
//! Packs are authored in YAML or JSON; the loader detects the encoding from
//! the content itself so callers never have to declare it. The diff engine
//! only ever sees the normalized [`ContextPack`] model and has no opinion
//! about serialization formats.
//!
//! A malformed document is a hard [`PackDiffError::Parse`]; an individually
//! ill-shaped *section* inside an otherwise valid document is not (the model
//! degrades it to empty, see [`crate::model`]).

use crate::error::{PackDiffError, ParseErrorKind, Result};
use crate::model::ContextPack;
use std::path::Path;

/// Supported context pack encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackFormat {
    Json,
    Yaml,
}

/// Detect the encoding of a document from its content.
///
/// JSON documents open with an object or array delimiter; everything else
/// is treated as YAML, which also accepts JSON-ish scalars gracefully.
#[must_use]
pub fn detect_format(content: &str) -> PackFormat {
    match content.trim_start().chars().next() {
        Some('{' | '[') => PackFormat::Json,
        _ => PackFormat::Yaml,
    }
}

/// Load a context pack from a file.
pub fn parse_pack(path: &Path) -> Result<ContextPack> {
    let content = std::fs::read_to_string(path).map_err(|e| PackDiffError::io(path, e))?;
    parse_pack_str(&content)
}

/// Parse a context pack from string content, detecting the encoding.
///
/// The top level of a pack must be a mapping; a valid document that is a
/// list or a scalar is rejected with [`ParseErrorKind::NotAMapping`] instead
/// of a generic deserialization error.
pub fn parse_pack_str(content: &str) -> Result<ContextPack> {
    match detect_format(content) {
        PackFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(content).map_err(|e| {
                PackDiffError::parse(
                    "JSON context pack",
                    ParseErrorKind::InvalidJson(e.to_string()),
                )
            })?;
            if !value.is_object() {
                return Err(PackDiffError::parse(
                    "JSON context pack",
                    ParseErrorKind::NotAMapping,
                ));
            }
            serde_json::from_value(value).map_err(|e| {
                PackDiffError::parse(
                    "JSON context pack",
                    ParseErrorKind::InvalidJson(e.to_string()),
                )
            })
        }
        PackFormat::Yaml => {
            let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| {
                PackDiffError::parse(
                    "YAML context pack",
                    ParseErrorKind::InvalidYaml(e.to_string()),
                )
            })?;
            if !value.is_mapping() {
                return Err(PackDiffError::parse(
                    "YAML context pack",
                    ParseErrorKind::NotAMapping,
                ));
            }
            serde_yaml::from_value(value).map_err(|e| {
                PackDiffError::parse(
                    "YAML context pack",
                    ParseErrorKind::InvalidYaml(e.to_string()),
                )
            })
        }
    }
}
