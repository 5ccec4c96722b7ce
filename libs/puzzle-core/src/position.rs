//! Position validation and side-to-move detection.

use crate::error::{RecordError, Result};
use crate::markup::ordered_list_to_html;
use crate::types::{PuzzleRecord, Side};
use regex::Regex;
use shakmaty::fen::Fen;
use shakmaty::san::SanPlus;
use shakmaty::{CastlingMode, Chess, Color, Position, PositionError};
use std::sync::OnceLock;

/// A record whose position parsed and whose solution fits it.
#[derive(Debug, Clone)]
pub struct ValidatedPuzzle {
    pub record: PuzzleRecord,
    pub position: Chess,
    pub side: Side,
    /// Supplied instructions, or "White to move" / "Black to move".
    pub instructions: String,
    /// Solution with lettered lists converted to HTML.
    pub solution_html: String,
}

impl From<Color> for Side {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Side::White,
            Color::Black => Side::Black,
        }
    }
}

/// Parse a FEN string into a position.
///
/// Castling rights and en passant squares that do not fit the board are
/// dropped rather than rejected.
pub fn parse_position(fen: &str) -> std::result::Result<Chess, String> {
    let fen: Fen = fen.trim().parse().map_err(|e| format!("{e}"))?;
    fen.into_position(CastlingMode::Standard)
        .or_else(PositionError::ignore_invalid_castling_rights)
        .or_else(PositionError::ignore_invalid_ep_square)
        .map_err(|e| format!("{e}"))
}

/// Validate one record.
pub fn validate(record: PuzzleRecord) -> Result<ValidatedPuzzle> {
    let position = parse_position(&record.position).map_err(|reason| {
        RecordError::InvalidPosition {
            label: record.label.clone(),
            position: record.position.clone(),
            reason,
        }
    })?;
    let side = Side::from(position.turn());

    if record.check_move_agreement {
        check_first_move(&position, &record.solution).map_err(|reason| {
            RecordError::MoveAgreement {
                label: record.label.clone(),
                side,
                reason,
            }
        })?;
    }

    let solution_html = ordered_list_to_html(&record.solution)
        .map_err(|reason| RecordError::validation(&record.label, reason))?;

    let instructions = record
        .instructions
        .clone()
        .unwrap_or_else(|| side.to_move_text());

    Ok(ValidatedPuzzle {
        record,
        position,
        side,
        instructions,
        solution_html,
    })
}

fn first_move_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(?:\(\w\)\s*)?(?:(\d+)\s*(\.{1,3}|…)(?:\s*(\.\.\.|…))?\s*)?([^\s,;]+)")
            .expect("valid first move regex")
    })
}

/// The opening move of a solution as (side named by its move number, SAN token).
fn first_move(solution: &str) -> Option<(Option<Side>, &str)> {
    let caps = first_move_re().captures(solution)?;
    let token = caps.get(4)?.as_str();
    let numbered_side = caps.get(1).map(|_| {
        let marker = caps.get(2).map_or("", |m| m.as_str());
        if marker.len() > 1 || marker == "…" || caps.get(3).is_some() {
            Side::Black
        } else {
            Side::White
        }
    });
    Some((numbered_side, token))
}

/// Check that the solution opens with a move the side to move can play.
fn check_first_move(position: &Chess, solution: &str) -> std::result::Result<(), String> {
    let side = Side::from(position.turn());
    let (numbered_side, token) =
        first_move(solution).ok_or_else(|| "solution has no first move".to_string())?;

    if let Some(numbered) = numbered_side {
        if numbered != side {
            return Err(format!("move number marks a {numbered} move"));
        }
    }

    let san_text = clean_san(token);
    let san: SanPlus = san_text
        .parse()
        .map_err(|_| format!("{token:?} is not a move in algebraic notation"))?;
    san.san
        .to_move(position)
        .map_err(|e| format!("{token} cannot be played here ({e})"))?;
    Ok(())
}

fn clean_san(token: &str) -> String {
    let trimmed = token.trim_end_matches(['!', '?', '.']);
    if trimmed.starts_with("0-0") {
        trimmed.replace('0', "O")
    } else {
        trimmed.to_string()
    }
}
