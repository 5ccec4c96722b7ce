//! Collection store boundary.
//!
//! The importer only needs three operations from the flashcard collection:
//! list the keys of cards already filed under some decks, make sure a deck
//! exists, and add a card to a deck. The desktop collection file is one
//! implementation (in the CLI crate); [`MemoryStore`] is another.

use crate::error::StoreError;
use crate::key::CardKey;
use std::collections::{BTreeMap, HashSet};

type Result<T> = std::result::Result<T, StoreError>;

/// Store of decks and cards.
pub trait CardStore {
    /// Keys of every card filed under any of `decks`. Decks that do not
    /// exist contribute nothing.
    fn query_existing_keys(&self, decks: &[String]) -> Result<HashSet<CardKey>>;

    /// Create the deck if it is missing.
    fn ensure_collection(&mut self, name: &str) -> Result<()>;

    /// Add one card to an existing deck, returning its id.
    fn insert_card(&mut self, deck: &str, front: &str, back: &str, tags: &[String]) -> Result<i64>;
}

/// A card as held by a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCard {
    pub id: i64,
    pub deck: String,
    pub front: String,
    pub back: String,
    pub tags: Vec<String>,
}

impl StoredCard {
    pub fn key(&self) -> Option<CardKey> {
        CardKey::from_fields(&self.front, &self.back)
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    decks: BTreeMap<String, Vec<StoredCard>>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards in a deck, oldest first. Empty if the deck does not exist.
    pub fn cards(&self, deck: &str) -> &[StoredCard] {
        self.decks.get(deck).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn card_count(&self) -> usize {
        self.decks.values().map(Vec::len).sum()
    }
}

impl CardStore for MemoryStore {
    fn query_existing_keys(&self, decks: &[String]) -> Result<HashSet<CardKey>> {
        Ok(decks
            .iter()
            .flat_map(|deck| self.cards(deck))
            .filter_map(StoredCard::key)
            .collect())
    }

    fn ensure_collection(&mut self, name: &str) -> Result<()> {
        self.decks.entry(name.to_string()).or_default();
        Ok(())
    }

    fn insert_card(&mut self, deck: &str, front: &str, back: &str, tags: &[String]) -> Result<i64> {
        let cards = self.decks.get_mut(deck).ok_or_else(|| StoreError::Write {
            deck: deck.to_string(),
            reason: "deck does not exist".to_string(),
        })?;
        self.next_id += 1;
        cards.push(StoredCard {
            id: self.next_id,
            deck: deck.to_string(),
            front: front.to_string(),
            back: back.to_string(),
            tags: tags.to_vec(),
        });
        Ok(self.next_id)
    }
}

/// Reads from a real store but keeps every write in memory.
pub struct DryRunStore<'a, S: CardStore> {
    inner: &'a S,
    pending: MemoryStore,
}

impl<'a, S: CardStore> DryRunStore<'a, S> {
    pub fn new(inner: &'a S) -> Self {
        Self {
            inner,
            pending: MemoryStore::new(),
        }
    }

    /// Writes that would have reached the real store.
    pub fn pending(&self) -> &MemoryStore {
        &self.pending
    }
}

impl<S: CardStore> CardStore for DryRunStore<'_, S> {
    fn query_existing_keys(&self, decks: &[String]) -> Result<HashSet<CardKey>> {
        let mut keys = self.inner.query_existing_keys(decks)?;
        keys.extend(self.pending.query_existing_keys(decks)?);
        Ok(keys)
    }

    fn ensure_collection(&mut self, name: &str) -> Result<()> {
        self.pending.ensure_collection(name)
    }

    fn insert_card(&mut self, deck: &str, front: &str, back: &str, tags: &[String]) -> Result<i64> {
        self.pending.insert_card(deck, front, back, tags)
    }
}
