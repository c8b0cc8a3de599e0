//! Traversal module.
//! Walks the immediate subdirectories of the boards root, interprets each
//! directory name as a `<width>x<height>` split token and indexes the
//! `.png` files inside. Malformed folder names are reported and skipped;
//! a filesystem error on the root itself is fatal.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::metadata::{BoardEntry, MetadataCollection};

/// Parses a `<width>x<height>` folder name into split dimensions.
/// The separator is case-insensitive; both halves must be non-negative
/// integers. Returns None for names like `10xten` or `10x20x30`.
fn parse_split_name(name: &str) -> Option<(u32, u32)> {
    let sep = name.find(['x', 'X'])?;
    let width = name[..sep].parse().ok()?;
    let height = name[sep + 1..].parse().ok()?;
    Some((width, height))
}

/// Scans `root` and builds the full metadata collection in one pass.
/// `rel_prefix` is the fixed root name joined into every entry's path, so
/// paths come out as `<rel_prefix>/<dir>/<file>` with forward slashes on
/// every platform.
pub fn scan_boards(root: &Path, rel_prefix: &str) -> Result<MetadataCollection> {
    let mut metadata = MetadataCollection::new();

    let entries = fs::read_dir(root)
        .with_context(|| format!("Failed to read boards root {}", root.display()))?;

    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read entry under {}", root.display()))?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let dir_name = entry.file_name().to_string_lossy().into_owned();
        // No separator at all means the folder is not a split folder; only
        // names that look like split tokens but fail to parse get reported.
        if !dir_name.contains(['x', 'X']) {
            continue;
        }
        let Some((split_x, split_y)) = parse_split_name(&dir_name) else {
            println!("Skipping folder with invalid dimension format: {dir_name}");
            continue;
        };

        index_split_folder(
            &entry.path(),
            &dir_name,
            split_x,
            split_y,
            rel_prefix,
            &mut metadata,
        )?;
    }

    Ok(metadata)
}

/// Indexes every `.png` file (case-sensitive extension) in one split folder.
/// A later file with a colliding id overwrites the earlier entry.
fn index_split_folder(
    dir: &Path,
    dir_name: &str,
    split_x: u32,
    split_y: u32,
    rel_prefix: &str,
    metadata: &mut MetadataCollection,
) -> Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read split folder {}", dir.display()))?;

    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read entry under {}", dir.display()))?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        let Some(id) = file_name.strip_suffix(".png") else {
            continue;
        };

        metadata.insert(
            id.to_string(),
            BoardEntry {
                path: format!("{rel_prefix}/{dir_name}/{file_name}"),
                split_x,
                split_y,
            },
        );
    }

    Ok(())
}
