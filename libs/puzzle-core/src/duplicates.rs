//! Find boards that appear on several cards with different solutions.

use crate::matching::normalized_similarity;
use crate::store::StoredCard;
use serde::Serialize;
use std::collections::BTreeMap;

/// Cards sharing one board but disagreeing on the back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateGroup {
    pub board: String,
    pub cards: Vec<DuplicateCard>,
    /// Lowest pairwise similarity between the backs, 0.0 to 1.0.
    pub min_similarity: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateCard {
    pub id: i64,
    pub back: String,
}

/// Group cards by board and keep boards with more than one distinct back.
///
/// Cards whose front has no board diagram are ignored. Groups come out in
/// board order.
pub fn find_duplicates(cards: &[StoredCard]) -> Vec<DuplicateGroup> {
    let mut by_board: BTreeMap<String, Vec<(String, &StoredCard)>> = BTreeMap::new();
    for card in cards {
        if let Some(key) = card.key() {
            by_board
                .entry(key.board().to_string())
                .or_default()
                .push((key.back().to_string(), card));
        }
    }

    by_board
        .into_iter()
        .filter_map(|(board, entries)| {
            let mut distinct: Vec<(String, &StoredCard)> = Vec::new();
            for (back, card) in entries {
                if !distinct.iter().any(|(b, _)| *b == back) {
                    distinct.push((back, card));
                }
            }
            if distinct.len() < 2 {
                return None;
            }

            let mut min_similarity: f64 = 1.0;
            for (i, (a, _)) in distinct.iter().enumerate() {
                for (b, _) in &distinct[i + 1..] {
                    min_similarity = min_similarity.min(normalized_similarity(a, b));
                }
            }

            Some(DuplicateGroup {
                board,
                cards: distinct
                    .into_iter()
                    .map(|(_, card)| DuplicateCard {
                        id: card.id,
                        back: card.back.clone(),
                    })
                    .collect(),
                min_similarity,
            })
        })
        .collect()
}
