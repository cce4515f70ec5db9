//! Reference dataset and JSON entry files

use std::path::Path;

use crate::core::entry::KnowledgeEntry;
use crate::error::{LensError, Result};

const REFERENCE_ENTRIES: &str = include_str!("../../data/reference_entries.json");

/// The bundled reference entries, unpersisted (`id == 0`).
pub fn reference_entries() -> Result<Vec<KnowledgeEntry>> {
    parse_entries(REFERENCE_ENTRIES)
        .map_err(|err| LensError::Serialization(format!("bundled reference data: {err}")))
}

/// Read a JSON array of entries from disk.
///
/// Ids in the file are kept: entries with an id update that row on import,
/// entries without one are inserted.
pub fn load_entries_file(path: &Path) -> Result<Vec<KnowledgeEntry>> {
    let raw = std::fs::read_to_string(path)?;
    parse_entries(&raw)
        .map_err(|err| LensError::Import(format!("parse {}: {err}", path.display())))
}

fn parse_entries(raw: &str) -> Result<Vec<KnowledgeEntry>> {
    let entries: Vec<KnowledgeEntry> = serde_json::from_str(raw)?;
    for entry in &entries {
        entry.validate()?;
    }
    Ok(entries)
}
