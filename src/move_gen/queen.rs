//! Queen move generation: the union of bishop and rook movement.

use super::{bishop, rook};
use crate::error::ChessCoreResult;
use crate::types::{Board, MoveList};

pub fn generate(board: Board, cell: u32, moves: &mut MoveList) -> ChessCoreResult<()> {
    bishop::generate(board, cell, moves)?;
    rook::generate(board, cell, moves)?;
    Ok(())
}
