//! Pack parsing stage.

use crate::model::ContextPack;
use crate::parsers::parse_pack;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse a context pack with context for error messages.
pub fn parse_pack_with_context(path: &Path, quiet: bool) -> Result<ContextPack> {
    if !quiet {
        tracing::info!("Parsing context pack: {:?}", path);
    }
    let pack = parse_pack(path)
        .with_context(|| format!("Failed to load context pack from {}", path.display()))?;
    if !quiet {
        tracing::debug!(
            pack = pack.name(),
            version = pack.version(),
            states = pack.states.len(),
            "parsed context pack"
        );
    }
    Ok(pack)
}
