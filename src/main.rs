mod metadata;
mod scan;

use anyhow::Result;
use clap::Command;
use std::path::Path;

/// Fixed root scanned for `<width>x<height>` split folders.
const BOARDS_ROOT: &str = "assets/boards";
/// Manifest written inside the root, overwritten on every run.
const OUTPUT_FILE: &str = "assets/boards/boards_metadata.json";

fn main() -> Result<()> {
    // No arguments or flags; clap still supplies --help/--version.
    Command::new("boards-metadata")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Indexes board images under assets/boards into a JSON manifest")
        .get_matches();

    let metadata = scan::scan_boards(Path::new(BOARDS_ROOT), BOARDS_ROOT)?;

    println!("Found {} board entries.", metadata.len());

    metadata::write_metadata(&metadata, Path::new(OUTPUT_FILE))?;

    println!("Metadata saved to {OUTPUT_FILE}");
    Ok(())
}
