//! The `import` command.

use crate::config::EffectiveSettings;
use crate::db::SqliteStore;
use anyhow::{Context, Result};
use puzzle_core::{import, parse, DryRunStore, ImportSummary, LoadError, LoadReport, LoadedFile};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What one import run did.
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub source: PathBuf,
    pub collection: PathBuf,
    pub deck: String,
    pub dry_run: bool,
    pub entries: LoadReport,
    #[serde(flatten)]
    pub summary: ImportSummary,
}

/// Deck name derived from the puzzle file name.
fn deck_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("default")
        .to_string()
}

fn read_puzzles(path: &Path) -> Result<LoadedFile, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse(&content)
}

/// Import every puzzle in `file` into the configured collection.
///
/// Returns an error only when the file cannot be loaded or the collection
/// cannot be opened or queried. Bad records end up in the report.
pub fn import_file(
    file: &Path,
    deck: Option<&str>,
    settings: &EffectiveSettings,
    dry_run: bool,
) -> Result<ImportReport> {
    let LoadedFile { outcomes, report } = read_puzzles(file)?;
    tracing::info!(
        entries = report.entries,
        complete = report.complete,
        "loaded {}",
        file.display()
    );
    if report.blank > 0 {
        tracing::info!(count = report.blank, "blank entries");
    }
    if report.solution_without_position > 0 {
        tracing::warn!(
            count = report.solution_without_position,
            "entries with a solution but no position"
        );
    }
    if report.position_without_solution > 0 {
        tracing::warn!(
            count = report.position_without_solution,
            "entries with a position but no solution"
        );
    }

    let deck = deck.map(str::to_string).unwrap_or_else(|| deck_from_path(file));
    let options = settings.render_options(&deck);
    let collection = &settings.collection_path;

    let mut store = SqliteStore::open(collection)
        .with_context(|| format!("Failed to open collection: {}", collection.display()))?;

    let summary = if dry_run {
        let mut preview = DryRunStore::new(&store);
        import(&mut preview, outcomes, &options)?
    } else {
        import(&mut store, outcomes, &options)?
    };

    for failed in &summary.failed {
        tracing::warn!(label = %failed.label, kind = %failed.kind, "{}", failed.message);
    }
    tracing::info!(
        created = summary.created.len(),
        skipped = summary.skipped.len(),
        failed = summary.failed.len(),
        dry_run,
        "import finished"
    );

    Ok(ImportReport {
        source: file.to_path_buf(),
        collection: collection.clone(),
        deck,
        dry_run,
        entries: report,
        summary,
    })
}

pub fn print_report<W: Write>(out: &mut W, report: &ImportReport, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        return Ok(());
    }

    let summary = &report.summary;
    if report.dry_run {
        writeln!(out, "Dry run, nothing was written.")?;
    }
    writeln!(
        out,
        "{} -> {}",
        report.source.display(),
        report.collection.display()
    )?;
    writeln!(out, "created: {}", summary.created.len())?;
    for (deck, count) in summary.created_by_deck() {
        writeln!(out, "  {deck}: {count}")?;
    }
    writeln!(out, "skipped: {}", summary.skipped.len())?;
    writeln!(out, "failed: {}", summary.failed.len())?;
    for failed in &summary.failed {
        writeln!(out, "  [{}] {}", failed.kind, failed.message)?;
    }
    Ok(())
}
