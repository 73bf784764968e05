use std::fs;
use std::path::Path;

use crate::error::{CatalogueError, Result};
use crate::model::{Candidate, DirectoryEntry};

/// Parses a directory listing (JSON array of repository records) into
/// candidates, preserving listing order. A blank `name` is a fatal
/// precondition violation, not something to paper over.
pub fn parse_directory(json: &str) -> Result<Vec<Candidate>> {
    let entries: Vec<DirectoryEntry> = serde_json::from_str(json)?;
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            if entry.name.trim().is_empty() {
                return Err(CatalogueError::BlankIdentifier { index });
            }
            Ok(Candidate::from(entry))
        })
        .collect()
}

/// Reads and parses a directory listing saved to disk.
pub fn load_directory(path: &Path) -> Result<Vec<Candidate>> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogueError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_directory(&raw)
}
