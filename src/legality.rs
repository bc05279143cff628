//! `is_legal_move`: the one component that layers real king-safety on top of the
//! generator's pseudo-legal moves.
//!
//! Geometric legality (destination in the playable region, source holds an
//! own-colour piece, move geometry matches the piece's kind) is exactly
//! [`crate::move_gen`]'s pseudo-legality contract restated. So rather than
//! duplicating per-kind geometry here, this checks membership in
//! [`generate_moves`]'s output. The one thing the generator deliberately does not
//! check is whether the move leaves the mover's own king capturable next ply.

use crate::board::apply_move;
use crate::constants::MATE_THRESHOLD;
use crate::error::ChessCoreResult;
use crate::move_gen::generate_moves;
use crate::search::nega_max;
use crate::types::{Board, MoveWord};

/// `false` if `mv` is not even pseudo-legal, or if it leaves the mover's king
/// capturable on the opponent's single best reply. Known gap: a king exposed to a
/// reply that is not the opponent's *highest-scoring* move is not caught by this
/// check.
pub fn is_legal_move(board: Board, mv: MoveWord) -> ChessCoreResult<bool> {
    let moves = generate_moves(board)?;
    if !moves.as_slice().contains(&mv) {
        return Ok(false);
    }

    let next = apply_move(board, mv);
    Ok(nega_max(next, 1)? >= MATE_THRESHOLD)
}
