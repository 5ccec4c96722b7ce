//! Card rendering.

use crate::board::{ascii_board, render_svg, BoardStyle};
use crate::key::CardKey;
use crate::position::ValidatedPuzzle;
use crate::types::{ColorScheme, RenderOptions, RenderedCard};
use shakmaty::Position;

/// Build the flashcard content for a validated puzzle.
///
/// Front: board diagram, then the description (if any), then the
/// instructions as the final text. Back: the solution in bold.
pub fn render(puzzle: &ValidatedPuzzle, options: &RenderOptions, scheme: ColorScheme) -> RenderedCard {
    let record = &puzzle.record;
    let style = BoardStyle {
        pixels: options.board_pixels,
        coordinates: options.coordinates,
        scheme,
    };

    let mut front = render_svg(puzzle.position.board(), &style);
    front.push_str("<br>");
    if !record.description.is_empty() {
        front.push_str(&record.description);
        front.push_str("<br>");
    }
    front.push_str(&puzzle.instructions);

    let back = format!("<b>{}</b>", puzzle.solution_html);

    let mut tags = record.tags.clone();
    if let Some(tag) = &options.bookkeeping_tag {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.clone());
        }
    }

    let key = CardKey::new(&ascii_board(puzzle.position.board()), &back);

    RenderedCard {
        label: record.label.clone(),
        front,
        back,
        tags,
        deck: record.difficulty.deck_name(&options.base_deck),
        key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::validate;
    use crate::types::{Difficulty, PuzzleRecord};
    use pretty_assertions::assert_eq;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";

    fn rendered(record: PuzzleRecord) -> RenderedCard {
        let validated = validate(record).unwrap();
        render(&validated, &RenderOptions::new("Tactics"), ColorScheme::Brown)
    }

    #[test]
    fn default_front_ends_with_side_to_move() {
        let card = rendered(PuzzleRecord::new("p", START, "1. e4"));
        assert!(card.front.ends_with("White to move"));
        assert!(!card.front.contains("Black to move"));
        assert_eq!(card.back, "<b>1. e4</b>");
        assert_eq!(card.deck, "Tactics");
    }

    #[test]
    fn black_to_move_front() {
        let card = rendered(PuzzleRecord::new("p", AFTER_E4, "1... c5"));
        assert!(card.front.ends_with("Black to move"));
        assert!(!card.front.contains("White to move"));
    }

    #[test]
    fn description_precedes_instructions() {
        let mut record = PuzzleRecord::new("p", START, "1. e4");
        record.description = "Position 1: Opening".to_string();
        let card = rendered(record);
        assert!(card.front.ends_with("<br>Position 1: Opening<br>White to move"));
    }

    #[test]
    fn hard_puzzles_go_to_hard_deck() {
        let mut record = PuzzleRecord::new("p", START, "1. e4");
        record.difficulty = Difficulty::Hard;
        assert_eq!(rendered(record).deck, "Hard: Tactics");
    }

    #[test]
    fn tags_pass_through_with_bookkeeping_tag() {
        let mut record = PuzzleRecord::new("p", START, "1. e4");
        record.tags = vec!["opening".to_string()];
        assert_eq!(rendered(record).tags, vec!["opening", "chess_puzzle"]);

        let mut record = PuzzleRecord::new("p", START, "1. e4");
        record.tags = vec!["chess_puzzle".to_string()];
        assert_eq!(rendered(record).tags, vec!["chess_puzzle"]);
    }

    #[test]
    fn key_independent_of_colors() {
        let validated = validate(PuzzleRecord::new("p", START, "1. e4")).unwrap();
        let options = RenderOptions::new("Tactics");
        let blue = render(&validated, &options, ColorScheme::Blue);
        let green = render(&validated, &options, ColorScheme::Green);
        assert_ne!(blue.front, green.front);
        assert_eq!(blue.key, green.key);
    }

    #[test]
    fn key_matches_stored_fields() {
        let mut record = PuzzleRecord::new("p", START, "1. e4");
        record.description = "See <pre>notes</pre>".to_string();
        let card = rendered(record);
        assert_eq!(CardKey::from_fields(&card.front, &card.back), Some(card.key));
    }
}
