use anyhow::{Context, Result};
use puzzle_core::template;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Write a skeleton puzzle file with `count` entries. Never overwrites.
pub fn write_template(path: &Path, count: usize) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("Refusing to write template: {}", path.display()))?;
    file.write_all(template(count).as_bytes())
        .with_context(|| format!("Failed to write template: {}", path.display()))?;
    tracing::info!(path = %path.display(), entries = count, "wrote template");
    Ok(())
}
