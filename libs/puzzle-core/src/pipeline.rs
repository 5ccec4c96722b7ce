//! Load → validate → render → reconcile → write.

use crate::error::{RecordError, StoreError};
use crate::position::validate;
use crate::reconcile::{reconcile, DeckKeys};
use crate::render::render;
use crate::store::CardStore;
use crate::types::{PuzzleRecord, RenderOptions, RenderedCard};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// A card that was created or skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardOutcome {
    pub label: String,
    pub deck: String,
}

impl From<&RenderedCard> for CardOutcome {
    fn from(card: &RenderedCard) -> Self {
        Self {
            label: card.label.clone(),
            deck: card.deck.clone(),
        }
    }
}

/// A record that produced no card, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedRecord {
    pub label: String,
    pub kind: String,
    pub message: String,
}

impl From<&RecordError> for FailedRecord {
    fn from(error: &RecordError) -> Self {
        Self {
            label: error.label().to_string(),
            kind: error.kind().to_string(),
            message: error.to_string(),
        }
    }
}

/// End-of-run report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub created: Vec<CardOutcome>,
    /// Cards already present in the collection (or earlier in the file).
    pub skipped: Vec<CardOutcome>,
    pub failed: Vec<FailedRecord>,
}

impl ImportSummary {
    pub fn created_by_deck(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for outcome in &self.created {
            *counts.entry(outcome.deck.as_str()).or_insert(0) += 1;
        }
        counts
    }

    pub fn failed_of_kind(&self, kind: &str) -> usize {
        self.failed.iter().filter(|f| f.kind == kind).count()
    }
}

/// Run one import against `store`.
///
/// Only a store that cannot be queried aborts the run; record problems and
/// individual write failures are collected in the summary.
pub fn import<S: CardStore>(
    store: &mut S,
    outcomes: Vec<Result<PuzzleRecord, RecordError>>,
    options: &RenderOptions,
) -> Result<ImportSummary, StoreError> {
    let mut summary = ImportSummary::default();
    let mut schemes = options.scheme_cycle();
    let mut rendered = Vec::new();

    for outcome in outcomes {
        match outcome.and_then(validate) {
            Ok(puzzle) => {
                let scheme = schemes.next().unwrap_or_default();
                rendered.push(render(&puzzle, options, scheme));
            }
            Err(error) => summary.failed.push(FailedRecord::from(&error)),
        }
    }

    let mut decks: Vec<String> = Vec::new();
    for card in &rendered {
        if !decks.contains(&card.deck) {
            decks.push(card.deck.clone());
        }
    }

    let mut existing = DeckKeys::new();
    for deck in &decks {
        let keys = store.query_existing_keys(std::slice::from_ref(deck))?;
        existing.extend(keys.into_iter().map(|key| (deck.clone(), key)));
    }
    let reconciled = reconcile(rendered, &existing);
    summary
        .skipped
        .extend(reconciled.skip.iter().map(CardOutcome::from));

    let mut ensured: HashSet<String> = HashSet::new();
    for card in &reconciled.create {
        match write_card(store, card, &mut ensured) {
            Ok(()) => summary.created.push(CardOutcome::from(card)),
            Err(error) => summary.failed.push(FailedRecord {
                label: card.label.clone(),
                kind: "store_write".to_string(),
                message: format!("{}: {error}", card.label),
            }),
        }
    }

    Ok(summary)
}

fn write_card<S: CardStore>(
    store: &mut S,
    card: &RenderedCard,
    ensured: &mut HashSet<String>,
) -> Result<(), StoreError> {
    if !ensured.contains(&card.deck) {
        store.ensure_collection(&card.deck)?;
        ensured.insert(card.deck.clone());
    }
    store.insert_card(&card.deck, &card.front, &card.back, &card.tags)?;
    Ok(())
}
