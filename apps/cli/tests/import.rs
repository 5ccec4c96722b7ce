//! Import command against an on-disk collection.

mod common;

use common::fixtures::{self, AFTER_E4, SCHOLARS, START};
use common::TestContext;
use pretty_assertions::assert_eq;
use puzzle_cards_lib::commands::import_file;
use puzzle_cards_lib::config::Palette;

#[test]
fn test_start_position_creates_one_card() {
    let ctx = TestContext::new();
    let file = ctx.write_puzzles("tactics.yaml", &fixtures::puzzle("card1", START, "1. e4"));

    let report = import_file(&file, None, &ctx.settings(), false).unwrap();

    assert_eq!(report.deck, "tactics");
    assert_eq!(report.summary.created.len(), 1);
    assert!(report.summary.failed.is_empty());

    let cards = ctx.store().cards_in_deck("tactics").unwrap();
    assert_eq!(cards.len(), 1);
    assert!(cards[0].front.ends_with("White to move"));
    assert_eq!(cards[0].back, "<b>1. e4</b>");
    assert_eq!(cards[0].tags, vec!["chess_puzzle"]);
}

#[test]
fn test_second_run_creates_nothing() {
    let ctx = TestContext::new();
    let file = ctx.write_puzzles("tactics.yaml", &fixtures::puzzle("card1", START, "1. e4"));

    import_file(&file, None, &ctx.settings(), false).unwrap();
    let second = import_file(&file, None, &ctx.settings(), false).unwrap();

    assert_eq!(second.summary.created.len(), 0);
    assert_eq!(second.summary.skipped.len(), 1);
    assert_eq!(ctx.store().card_count().unwrap(), 1);
}

#[test]
fn test_restyled_board_is_still_a_duplicate() {
    let ctx = TestContext::new();
    let file = ctx.write_puzzles("tactics.yaml", &fixtures::puzzle("mate", SCHOLARS, "1. Qxf7#"));
    import_file(&file, None, &ctx.settings(), false).unwrap();

    let mut restyled = ctx.settings();
    restyled.board_pixels = Some(200);
    restyled.coordinates = true;
    restyled.color_schemes = Palette::Purple.schemes();
    let second = import_file(&file, None, &restyled, false).unwrap();

    assert_eq!(second.summary.created.len(), 0);
    assert_eq!(second.summary.skipped.len(), 1);
}

#[test]
fn test_missing_solution_is_reported() {
    let ctx = TestContext::new();
    let content = format!(
        "broken:\n  fen: {START}\n{}",
        fixtures::puzzle("fine", AFTER_E4, "1... c5")
    );
    let file = ctx.write_puzzles("tactics.yaml", &content);

    let report = import_file(&file, None, &ctx.settings(), false).unwrap();

    assert_eq!(report.entries.position_without_solution, 1);
    assert_eq!(report.summary.failed_of_kind("validation"), 1);
    assert_eq!(report.summary.failed[0].label, "broken");
    assert_eq!(report.summary.created.len(), 1);
}

#[test]
fn test_hard_puzzles_get_their_own_deck() {
    let ctx = TestContext::new();
    let content = format!(
        "{}{}",
        fixtures::puzzle("easy", START, "1. d4"),
        fixtures::hard_puzzle("hard", SCHOLARS, "1. Qxf7#")
    );
    let file = ctx.write_puzzles("openings.yaml", &content);

    let report = import_file(&file, Some("Traps"), &ctx.settings(), false).unwrap();

    assert_eq!(report.summary.created.len(), 2);
    let store = ctx.store();
    assert_eq!(store.deck_names().unwrap(), vec!["Hard: Traps", "Traps"]);
    assert_eq!(store.cards_in_deck("Hard: Traps").unwrap().len(), 1);
}

#[test]
fn test_wrong_side_is_excluded() {
    let ctx = TestContext::new();
    let file = ctx.write_puzzles("tactics.yaml", &fixtures::puzzle("p", AFTER_E4, "1. d4"));

    let report = import_file(&file, None, &ctx.settings(), false).unwrap();

    assert_eq!(report.summary.failed_of_kind("move_agreement"), 1);
    assert_eq!(ctx.store().card_count().unwrap(), 0);
}

#[test]
fn test_dry_run_writes_nothing() {
    let ctx = TestContext::new();
    let file = ctx.write_puzzles("tactics.yaml", &fixtures::puzzle("card1", START, "1. e4"));

    let report = import_file(&file, None, &ctx.settings(), true).unwrap();

    assert!(report.dry_run);
    assert_eq!(report.summary.created.len(), 1);
    assert_eq!(ctx.store().card_count().unwrap(), 0);
    assert!(ctx.store().deck_names().unwrap().is_empty());
}

#[test]
fn test_missing_collection_is_fatal() {
    let ctx = TestContext::new();
    let file = ctx.write_puzzles("tactics.yaml", &fixtures::puzzle("card1", START, "1. e4"));
    let mut settings = ctx.settings();
    settings.collection_path = ctx.path("nowhere/collection.db");

    assert!(import_file(&file, None, &settings, false).is_err());
    assert!(!settings.collection_path.exists());
}

#[test]
fn test_malformed_file_is_fatal() {
    let ctx = TestContext::new();
    let file = ctx.write_puzzles("tactics.yaml", "- just\n- a list\n");

    assert!(import_file(&file, None, &ctx.settings(), false).is_err());
    assert_eq!(ctx.store().card_count().unwrap(), 0);
}

#[test]
fn test_refiled_as_hard_lands_in_hard_deck() {
    let ctx = TestContext::new();
    let easy = ctx.write_puzzles("tactics.yaml", &fixtures::puzzle("p", START, "1. e4"));
    import_file(&easy, None, &ctx.settings(), false).unwrap();

    let content = format!(
        "{}{}",
        fixtures::hard_puzzle("p", START, "1. e4"),
        fixtures::puzzle("q", AFTER_E4, "1... c5")
    );
    let refiled = ctx.write_puzzles("tactics.yaml", &content);
    let report = import_file(&refiled, None, &ctx.settings(), false).unwrap();

    assert!(report.summary.skipped.is_empty());
    assert_eq!(report.summary.created_by_deck().get("Hard: tactics"), Some(&1));
    assert_eq!(report.summary.created_by_deck().get("tactics"), Some(&1));
    assert_eq!(ctx.store().card_count().unwrap(), 3);
}
