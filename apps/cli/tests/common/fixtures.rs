//! Puzzle file fragments.

pub const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
pub const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";
/// White mates with Qxf7#.
pub const SCHOLARS: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";

/// One YAML entry with position and solution.
pub fn puzzle(label: &str, fen: &str, solution: &str) -> String {
    format!("{label}:\n  fen: {fen}\n  solution: {solution}\n")
}

/// One YAML entry filed as hard.
pub fn hard_puzzle(label: &str, fen: &str, solution: &str) -> String {
    format!("{}  difficulty: hard\n", puzzle(label, fen, solution))
}
