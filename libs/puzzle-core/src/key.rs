//! Identity of a card for duplicate detection.

use crate::board::board_state;
use crate::matching::normalize_card_text;
use sha2::{Digest, Sha256};

/// Signature of a card: the board it shows and its normalized back.
///
/// Built from the stored card fields, so a card written by this tool is
/// recognised on the next run no matter which colours or size it was
/// drawn with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardKey {
    board: String,
    back: String,
}

impl CardKey {
    /// Key for a board diagram's text and a card back.
    pub fn new(board: &str, back: &str) -> Self {
        Self {
            board: board.trim().to_string(),
            back: normalize_card_text(back),
        }
    }

    /// Key for a card's front and back fields. `None` if the front carries
    /// no board diagram.
    pub fn from_fields(front: &str, back: &str) -> Option<Self> {
        board_state(front).map(|board| Self::new(board, back))
    }

    pub fn board(&self) -> &str {
        &self.board
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    /// SHA-256 hex digest, stored next to each card as a checksum.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.board.as_bytes());
        hasher.update([0x1f]);
        hasher.update(self.back.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
