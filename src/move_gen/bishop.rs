//! Bishop move generation: slides along the four diagonal rays.
//!
//! The `-9` ray is the one direction that can step onto cell 0 (the word's lowest
//! cell, which stores the side-to-move flag in its own bit 0); that single step is
//! rejected rather than walked, so a diagonal ray can never mistake the turn bit for
//! a capturable opposing piece.

use super::sliding;
use crate::constants::BISHOP_RAYS;
use crate::error::ChessCoreResult;
use crate::types::{Board, MoveList};

pub fn generate(board: Board, cell: u32, moves: &mut MoveList) -> ChessCoreResult<()> {
    for &dir in BISHOP_RAYS.iter() {
        sliding::generate(board, cell, &[dir], moves, |next| dir == -9 && next == 0)?;
    }
    Ok(())
}
