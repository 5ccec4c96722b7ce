use crate::db::SqliteStore;
use anyhow::{bail, Context, Result};
use puzzle_core::{find_duplicates, DuplicateGroup};
use std::io::Write;
use std::path::Path;

/// Boards in `deck` that were filed with more than one solution.
pub fn find_in_deck(collection: &Path, deck: &str) -> Result<Vec<DuplicateGroup>> {
    let store = SqliteStore::open(collection)
        .with_context(|| format!("Failed to open collection: {}", collection.display()))?;
    let decks = store.deck_names()?;
    if !decks.iter().any(|name| name == deck) {
        bail!("deck {deck:?} not found (decks: {})", decks.join(", "));
    }
    let cards = store.cards_in_deck(deck)?;
    tracing::debug!(deck, cards = cards.len(), "scanning for duplicates");
    Ok(find_duplicates(&cards))
}

pub fn print_groups<W: Write>(out: &mut W, groups: &[DuplicateGroup], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, groups)?;
        writeln!(out)?;
        return Ok(());
    }

    if groups.is_empty() {
        writeln!(out, "No duplicate boards.")?;
        return Ok(());
    }
    for group in groups {
        writeln!(
            out,
            "{} cards share a board (similarity {:.2}):",
            group.cards.len(),
            group.min_similarity
        )?;
        for line in group.board.lines() {
            writeln!(out, "    {line}")?;
        }
        for card in &group.cards {
            writeln!(out, "  #{}: {}", card.id, card.back)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
