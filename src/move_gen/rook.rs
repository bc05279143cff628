//! Rook move generation: slides along the four orthogonal rays.

use super::sliding;
use crate::constants::ROOK_RAYS;
use crate::error::ChessCoreResult;
use crate::types::{Board, MoveList};

pub fn generate(board: Board, cell: u32, moves: &mut MoveList) -> ChessCoreResult<()> {
    sliding::generate(board, cell, &ROOK_RAYS, moves, |_| false)
}
