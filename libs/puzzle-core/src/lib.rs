//! Core library for turning chess puzzles into flashcards.
//!
//! Provides:
//! - YAML loader for puzzle files, with per-entry validation
//! - Position validation (FEN, side to move, first-move agreement)
//! - Card rendering (SVG board diagram, lettered-list solutions)
//! - Card keys and reconciliation against an existing collection
//! - The store boundary trait and the import pipeline

pub mod board;
pub mod duplicates;
pub mod error;
pub mod key;
pub mod loader;
pub mod markup;
pub mod matching;
pub mod pipeline;
pub mod position;
pub mod reconcile;
pub mod render;
pub mod store;
pub mod types;

pub use duplicates::{find_duplicates, DuplicateCard, DuplicateGroup};
pub use error::{LoadError, RecordError, Result, StoreError};
pub use key::CardKey;
pub use loader::{parse, template, LoadReport, LoadedFile};
pub use pipeline::{import, CardOutcome, FailedRecord, ImportSummary};
pub use position::{validate, ValidatedPuzzle};
pub use store::{CardStore, DryRunStore, MemoryStore, StoredCard};
pub use types::{
    ColorScheme, Difficulty, PuzzleRecord, RenderOptions, RenderedCard, Side, HARD_DECK_PREFIX,
};
