//! `nega_max`: the recursive full-width score used by both itself and
//! [`super::root::search_move`].

use crate::board::{apply_move, piece_at};
use crate::constants::{KING, KING_CAPTURE_SCORE, LOWEST_SCORE};
use crate::error::ChessCoreResult;
use crate::evaluation::evaluate_move;
use crate::move_gen::generate_moves;
use crate::types::{Board, MoveWord};

/// Score `board` from the side-to-move's perspective, searching `depth` plies.
///
/// Returns `0` at `depth == 0` or when the side to move has no pseudo-legal move
/// (stalemate is conflated with "nothing more to add" here). If the best-scoring
/// move captures a king, the recursion stops immediately and returns
/// [`KING_CAPTURE_SCORE`] regardless of remaining `depth`: the king's reference
/// value dominates every other reachable swing, so no deeper search can change that
/// verdict.
pub fn nega_max(board: Board, depth: u32) -> ChessCoreResult<i32> {
    if depth == 0 {
        return Ok(0);
    }

    let moves = generate_moves(board)?;
    if moves.is_empty() {
        return Ok(0);
    }

    let (best_move, best_score) = best_scoring_move(board, moves.as_slice());

    if captures_a_king(board, best_move) {
        return Ok(KING_CAPTURE_SCORE);
    }

    let next = apply_move(board, best_move);
    let tail = nega_max(next, depth - 1)?;
    let mover_bit = (board & primitive_types::U256::one()).as_u32();
    Ok(if mover_bit == 0 {
        best_score + tail
    } else {
        -best_score + tail
    })
}

/// Highest-`evaluate_move` candidate, first-seen tie-break.
fn best_scoring_move(board: Board, candidates: &[MoveWord]) -> (MoveWord, i32) {
    let mut best_move = candidates[0];
    let mut best_score = LOWEST_SCORE;
    for &mv in candidates {
        let score = evaluate_move(board, mv);
        if score > best_score {
            best_score = score;
            best_move = mv;
        }
    }
    (best_move, best_score)
}

fn captures_a_king(board: Board, mv: MoveWord) -> bool {
    let (_, to) = crate::types::split_move(mv);
    piece_at(board, to as u32) & 0x7 == KING
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::starting_position;

    #[test]
    fn depth_zero_is_always_zero() {
        assert_eq!(nega_max(starting_position(), 0).unwrap(), 0);
    }

    #[test]
    fn nega_max_is_deterministic() {
        let b = starting_position();
        assert_eq!(nega_max(b, 3).unwrap(), nega_max(b, 3).unwrap());
    }
}
