//! Core types for the puzzle importer.

use crate::key::CardKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix applied to the base deck name for hard puzzles.
pub const HARD_DECK_PREFIX: &str = "Hard: ";

/// Which player acts next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
        }
    }

    /// Default instruction text for a puzzle with this side to move.
    pub fn to_move_text(self) -> String {
        format!("{} to move", self.as_str())
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Puzzle difficulty bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Hard => "hard",
        }
    }

    /// Parse leniently: surrounding whitespace and case are ignored.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Deck that cards of this difficulty are filed under.
    pub fn deck_name(&self, base_deck: &str) -> String {
        match self {
            Self::Easy => base_deck.to_string(),
            Self::Hard => format!("{HARD_DECK_PREFIX}{base_deck}"),
        }
    }
}

/// One puzzle entry from the input file, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRecord {
    pub label: String,
    pub position: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    pub solution: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub check_move_agreement: bool,
}

impl PuzzleRecord {
    /// Record with only the required fields set.
    pub fn new(label: &str, position: &str, solution: &str) -> Self {
        Self {
            label: label.to_string(),
            position: position.to_string(),
            description: String::new(),
            instructions: None,
            solution: solution.to_string(),
            difficulty: Difficulty::default(),
            tags: Vec::new(),
            check_move_agreement: true,
        }
    }
}

/// Display content for one flashcard, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub label: String,
    pub front: String,
    pub back: String,
    pub tags: Vec<String>,
    pub deck: String,
    pub key: CardKey,
}

/// Light/dark square colours for board diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    Blue,
    Brown,
    Gray,
    Green,
    Pink,
    Purple,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::Brown
    }
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 6] = [
        Self::Blue,
        Self::Brown,
        Self::Gray,
        Self::Green,
        Self::Pink,
        Self::Purple,
    ];

    /// (light, dark) hex colours without the leading `#`.
    pub fn colors(self) -> (&'static str, &'static str) {
        match self {
            Self::Blue => ("eeeed2", "6188b5"),
            Self::Brown => ("f0d9b5", "b58863"),
            Self::Gray => ("c8c8c8", "939393"),
            Self::Green => ("eeeed2", "769656"),
            Self::Pink => ("eeeed2", "f27372"),
            Self::Purple => ("eeeed2", "c0a2c7"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Brown => "brown",
            Self::Gray => "gray",
            Self::Green => "green",
            Self::Pink => "pink",
            Self::Purple => "purple",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scheme| scheme.as_str() == s)
    }
}

/// Options shared by every card rendered in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub base_deck: String,
    /// Board width/height in pixels. `None` leaves the SVG unsized.
    pub board_pixels: Option<u32>,
    pub coordinates: bool,
    /// Schemes cycled through card by card. Empty means brown.
    pub color_schemes: Vec<ColorScheme>,
    /// Tag added to every card written by this tool.
    pub bookkeeping_tag: Option<String>,
}

impl RenderOptions {
    pub fn new(base_deck: &str) -> Self {
        Self {
            base_deck: base_deck.to_string(),
            board_pixels: Some(380),
            coordinates: false,
            color_schemes: ColorScheme::ALL.to_vec(),
            bookkeeping_tag: Some("chess_puzzle".to_string()),
        }
    }

    /// Endless iterator over the configured colour schemes.
    pub fn scheme_cycle(&self) -> impl Iterator<Item = ColorScheme> + '_ {
        let schemes: &[ColorScheme] = if self.color_schemes.is_empty() {
            &[ColorScheme::Brown]
        } else {
            &self.color_schemes
        };
        schemes.iter().copied().cycle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_leniently() {
        assert_eq!(Difficulty::from_str(" Hard "), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("EASY"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("medium"), None);
    }

    #[test]
    fn deck_name_by_difficulty() {
        assert_eq!(Difficulty::Easy.deck_name("Tactics"), "Tactics");
        assert_eq!(Difficulty::Hard.deck_name("Tactics"), "Hard: Tactics");
    }

    #[test]
    fn side_to_move_text() {
        assert_eq!(Side::White.to_move_text(), "White to move");
        assert_eq!(Side::Black.to_move_text(), "Black to move");
    }

    #[test]
    fn scheme_cycle_wraps() {
        let mut options = RenderOptions::new("Deck");
        options.color_schemes = vec![ColorScheme::Blue, ColorScheme::Pink];
        let picked: Vec<_> = options.scheme_cycle().take(3).collect();
        assert_eq!(
            picked,
            vec![ColorScheme::Blue, ColorScheme::Pink, ColorScheme::Blue]
        );
    }

    #[test]
    fn empty_scheme_list_falls_back_to_brown() {
        let mut options = RenderOptions::new("Deck");
        options.color_schemes.clear();
        assert_eq!(options.scheme_cycle().next(), Some(ColorScheme::Brown));
    }

    #[test]
    fn color_scheme_from_str() {
        assert_eq!(ColorScheme::from_str("green"), Some(ColorScheme::Green));
        assert_eq!(ColorScheme::from_str("all"), None);
    }
}
