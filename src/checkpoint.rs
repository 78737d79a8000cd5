//! Save/load for character maps.
//!
//! Serializes a [`CharMap`] to JSON as `(char, code)` pairs ordered by code,
//! so a vocabulary built in one run can be supplied to a later one and the
//! file diffs cleanly.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{EncodeError, EncodeResult};
use crate::data::CharMap;

/// Serializable char map data.
#[derive(Debug, Serialize, Deserialize)]
pub struct CharMapData {
    /// `(char, code)` pairs, ordered by code.
    pub entries: Vec<(char, u32)>,
}

impl From<&CharMap> for CharMapData {
    fn from(char_map: &CharMap) -> Self {
        Self {
            entries: char_map.iter().collect(),
        }
    }
}

/// Save a char map to a JSON file.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn save_char_map(char_map: &CharMap, path: &Path) -> EncodeResult<()> {
    let json = serde_json::to_string_pretty(&CharMapData::from(char_map))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| EncodeError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, json).map_err(|source| EncodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), vocab_size = char_map.len(), "Saved char map");
    Ok(())
}

/// Load a char map from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if a character
/// is listed more than once.
pub fn load_char_map(path: &Path) -> EncodeResult<CharMap> {
    let json = std::fs::read_to_string(path).map_err(|source| EncodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let data: CharMapData = serde_json::from_str(&json)?;
    let char_map = CharMap::try_from_pairs(data.entries)?;
    debug!(path = %path.display(), vocab_size = char_map.len(), "Loaded char map");
    Ok(char_map)
}
