//! SVG board diagrams.
//!
//! Each diagram embeds a plain-text copy of the board inside
//! `<desc><pre>…</pre></desc>`. That copy is what identifies a card's
//! position when comparing against cards already in a collection, so it
//! must stay stable across renderings: colours, size and coordinates may
//! change without affecting it.

use crate::types::ColorScheme;
use shakmaty::{Board, Color, File, Piece, Rank, Role, Square};

const SQUARE: u32 = 45;
const MARGIN: u32 = 15;

/// Diagram appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardStyle {
    pub pixels: Option<u32>,
    pub coordinates: bool,
    pub scheme: ColorScheme,
}

/// Plain-text board, rank 8 first, `.` for empty squares.
pub fn ascii_board(board: &Board) -> String {
    (0..8u32)
        .rev()
        .map(|rank| {
            (0..8u32)
                .map(|file| {
                    let square = Square::from_coords(File::new(file), Rank::new(rank));
                    board
                        .piece_at(square)
                        .map_or('.', Piece::char)
                        .to_string()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the board as an SVG string, White at the bottom.
pub fn render_svg(board: &Board, style: &BoardStyle) -> String {
    let margin = if style.coordinates { MARGIN } else { 0 };
    let size = 8 * SQUARE + 2 * margin;
    let (light, dark) = style.scheme.colors();

    let mut svg = String::from("<svg xmlns=\"http://www.w3.org/2000/svg\" ");
    if let Some(pixels) = style.pixels {
        svg.push_str(&format!("width=\"{pixels}\" height=\"{pixels}\" "));
    }
    svg.push_str(&format!("viewBox=\"0 0 {size} {size}\">"));
    svg.push_str(&format!("<desc><pre>{}</pre></desc>", ascii_board(board)));

    for rank in 0..8u32 {
        for file in 0..8u32 {
            let x = margin + file * SQUARE;
            let y = margin + (7 - rank) * SQUARE;
            let fill = if (file + rank) % 2 == 1 { light } else { dark };
            svg.push_str(&format!(
                "<rect x=\"{x}\" y=\"{y}\" width=\"{SQUARE}\" height=\"{SQUARE}\" fill=\"#{fill}\"/>"
            ));

            let square = Square::from_coords(File::new(file), Rank::new(rank));
            if let Some(piece) = board.piece_at(square) {
                let center = SQUARE / 2;
                svg.push_str(&format!(
                    "<text x=\"{}\" y=\"{}\" font-size=\"38\" text-anchor=\"middle\" \
                     dominant-baseline=\"central\">{}</text>",
                    x + center,
                    y + center,
                    glyph(piece)
                ));
            }
        }
    }

    if style.coordinates {
        for (i, name) in "abcdefgh".chars().enumerate() {
            let x = margin + i as u32 * SQUARE + SQUARE / 2;
            svg.push_str(&format!(
                "<text x=\"{x}\" y=\"{}\" font-size=\"12\" text-anchor=\"middle\" \
                 dominant-baseline=\"central\">{name}</text>",
                size - margin / 2
            ));
        }
        for rank in 0..8u32 {
            let y = margin + (7 - rank) * SQUARE + SQUARE / 2;
            svg.push_str(&format!(
                "<text x=\"{}\" y=\"{y}\" font-size=\"12\" text-anchor=\"middle\" \
                 dominant-baseline=\"central\">{}</text>",
                margin / 2,
                rank + 1
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Extract the embedded plain-text board from rendered card HTML: the
/// first `<pre>` block, which the diagram places ahead of any card text.
pub fn board_state(html: &str) -> Option<&str> {
    let (_, rest) = html.split_once("<pre>")?;
    let (state, _) = rest.split_once("</pre>")?;
    Some(state)
}

fn glyph(piece: Piece) -> char {
    match (piece.color, piece.role) {
        (Color::White, Role::King) => '♔',
        (Color::White, Role::Queen) => '♕',
        (Color::White, Role::Rook) => '♖',
        (Color::White, Role::Bishop) => '♗',
        (Color::White, Role::Knight) => '♘',
        (Color::White, Role::Pawn) => '♙',
        (Color::Black, Role::King) => '♚',
        (Color::Black, Role::Queen) => '♛',
        (Color::Black, Role::Rook) => '♜',
        (Color::Black, Role::Bishop) => '♝',
        (Color::Black, Role::Knight) => '♞',
        (Color::Black, Role::Pawn) => '♟',
    }
}
