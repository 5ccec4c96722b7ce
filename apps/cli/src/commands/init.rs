use crate::db::SqliteStore;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Create an empty collection file, and its directory if needed.
pub fn init_collection(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    SqliteStore::create(path)
        .with_context(|| format!("Failed to create collection: {}", path.display()))?;
    tracing::info!(path = %path.display(), "created collection");
    Ok(())
}
