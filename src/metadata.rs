//! Metadata model module.
//! Defines the board entry record and the collection written out as
//! boards_metadata.json. Uses serde for JSON serialization.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One indexed board image: where it lives and how it subdivides into a grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardEntry {
    /// Forward-slash relative path, e.g. `assets/boards/100x36/alpha.png`.
    pub path: String,
    #[serde(rename = "splitX")]
    pub split_x: u32,
    #[serde(rename = "splitY")]
    pub split_y: u32,
}

/// Mapping from board id (filename minus `.png`) to its entry.
/// BTreeMap keeps the written JSON sorted by id, so reruns over the same
/// tree produce identical output regardless of directory listing order.
pub type MetadataCollection = BTreeMap<String, BoardEntry>;

/// Serializes the collection with 2-space indentation and writes it to
/// `output`, overwriting any existing file there.
pub fn write_metadata(metadata: &MetadataCollection, output: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(metadata)
        .context("Failed to serialize board metadata to JSON")?;
    fs::write(output, json)
        .with_context(|| format!("Failed to write metadata to {}", output.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MetadataCollection {
        let mut metadata = MetadataCollection::new();
        metadata.insert(
            "alpha".to_string(),
            BoardEntry {
                path: "assets/boards/100x36/alpha.png".to_string(),
                split_x: 100,
                split_y: 36,
            },
        );
        metadata.insert(
            "beta".to_string(),
            BoardEntry {
                path: "assets/boards/4x4/beta.png".to_string(),
                split_x: 4,
                split_y: 4,
            },
        );
        metadata
    }

    #[test]
    fn test_written_json_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("boards_metadata.json");
        let metadata = sample();

        write_metadata(&metadata, &output).unwrap();

        let json = fs::read_to_string(&output).unwrap();
        let parsed: MetadataCollection = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, metadata);
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"splitX\":100"));
        assert!(json.contains("\"splitY\":36"));
        assert!(json.contains("\"path\":\"assets/boards/100x36/alpha.png\""));
    }

    #[test]
    fn test_empty_collection_writes_empty_object() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("boards_metadata.json");

        write_metadata(&MetadataCollection::new(), &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "{}");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("boards_metadata.json");
        fs::write(&output, "stale contents").unwrap();

        write_metadata(&sample(), &output).unwrap();

        let parsed: MetadataCollection =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(parsed.len(), 2);
    }
}
