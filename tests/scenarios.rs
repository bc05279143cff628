//! End-to-end scenarios, each exercising the public API the way a host would.

use hexachess_core::board::{apply_move, rotate, starting_position};
use hexachess_core::legality::is_legal_move;
use hexachess_core::search::{nega_max, search_move};
use hexachess_core::types::{make_move, NO_MOVE};
use primitive_types::U256;

/// Surfaces `search_move`'s `tracing::debug!` outcome lines when a test fails;
/// `try_init` so repeated calls across test binaries don't panic on a second init.
fn init_tracing() {
    let _ = tracing_subscriber::fmt::try_init();
}

#[test]
fn starting_position_depth_three_search_picks_a_move_and_sees_no_mate() {
    init_tracing();
    let outcome = search_move(starting_position(), 3).unwrap();
    assert_eq!(outcome.best_move, make_move(20, 36));
    assert!(!outcome.opponent_mated);
}

/// Mover's king on cell 9, mover's queen on cell 41, same file. The queen's
/// single step onto cell 9 is a king capture, and the opponent is left with no
/// pieces on the board afterward.
#[test]
fn back_rank_mate_in_one_is_found() {
    let board = U256([
        0x0000006000000001,
        0x0000000000000000,
        0x000000d000000000,
        0x0000000000000000,
    ]);
    let outcome = search_move(board, 3).unwrap();
    assert_ne!(outcome.best_move, NO_MOVE);
    assert!(outcome.opponent_mated);
}

/// Same shape viewed from the side about to be mated: its king sits on the
/// piece-square table's local maximum, its only step is onto a square the
/// opposing queen then takes next ply. A depth-2 search should already see the
/// king as lost.
#[test]
fn mate_threat_against_the_mover_is_recognized() {
    let board = U256([
        0x0060000000000001,
        0x0000000000000000,
        0x0000000000000000,
        0x000000000d000000,
    ]);
    let mover_view = rotate(board);
    let score = nega_max(mover_view, 2).unwrap();
    assert!(score <= -4000, "expected a losing score, got {score}");
}

/// A position with one dominant tactical reply (an immediate king capture):
/// deepening the search from 3 to 5 plies must not change which move is chosen.
#[test]
fn depth_three_and_depth_five_agree_on_the_chosen_move_in_a_forced_tactic() {
    let board = U256([
        0x0000060000000001,
        0x0000000000000000,
        0x0000000000000d00,
        0x0000000000000000,
    ]);
    let shallow = search_move(board, 3).unwrap();
    let deep = search_move(board, 5).unwrap();
    assert_eq!(shallow.best_move, deep.best_move);
    assert!(is_legal_move(board, shallow.best_move).unwrap());
    assert!(is_legal_move(board, deep.best_move).unwrap());
}

/// A knight move that walks the mover's own king into an open rook file must be
/// rejected by the legality layer even though the generator offers it.
#[test]
fn legality_rejects_a_move_that_exposes_the_king_to_capture() {
    let board = U256([
        0x000000e000000001,
        0x00000000000000c0,
        0x0000000000000000,
        0x0000000000000030,
    ]);
    let mv = make_move(17, 27);
    assert!(!is_legal_move(board, mv).unwrap());
}

#[test]
fn evaluating_the_same_move_before_and_after_a_rotate_round_trip_agrees() {
    let board = starting_position();
    let mv = make_move(17, 25);
    let round_tripped = rotate(rotate(board));
    assert_eq!(board, round_tripped);

    let direct = apply_move(board, mv);
    let via_round_trip = apply_move(round_tripped, mv);
    assert_eq!(direct, via_round_trip);
}
