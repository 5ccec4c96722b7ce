//! Split rendered cards into those to create and those already present.

use crate::key::CardKey;
use crate::types::RenderedCard;
use std::collections::HashSet;

/// Result of reconciling a batch against existing cards.
#[derive(Debug, Clone, Default)]
pub struct Reconciled {
    pub create: Vec<RenderedCard>,
    pub skip: Vec<RenderedCard>,
}

/// Keys of cards already filed, paired with their deck.
pub type DeckKeys = HashSet<(String, CardKey)>;

/// Partition `cards` by whether their (deck, key) pair is in `existing`,
/// keeping input order.
///
/// A card only counts as present in its own target deck. Within the batch
/// the first card with a given pair is created and later ones are skipped,
/// so a file listing the same puzzle twice yields one card.
pub fn reconcile(cards: Vec<RenderedCard>, existing: &DeckKeys) -> Reconciled {
    let mut seen = existing.clone();
    let mut result = Reconciled::default();
    for card in cards {
        if seen.insert((card.deck.clone(), card.key.clone())) {
            result.create.push(card);
        } else {
            result.skip.push(card);
        }
    }
    result
}
