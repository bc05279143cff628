//! Pawn move generation.
//!
//! Pawns only ever move toward higher 8x8 indices: `rotate` reorients the board so
//! the mover's pieces always advance "forward" in that sense, so there is no
//! per-colour branch here the way a conventional engine needs one.

use crate::board::{is_capture, piece_at};
use crate::error::ChessCoreResult;
use crate::types::{make_move, Board, MoveList};

/// Single/double push plus the two diagonal captures, from `cell`.
pub fn generate(board: Board, cell: u32, moves: &mut MoveList) -> ChessCoreResult<()> {
    if piece_at(board, cell + 8) == 0 {
        moves.push(make_move(cell as u8, (cell + 8) as u8))?;
        if cell >> 3 == 2 && piece_at(board, cell + 16) == 0 {
            moves.push(make_move(cell as u8, (cell + 16) as u8))?;
        }
    }
    if is_capture(board, board >> ((cell + 7) * 4)) {
        moves.push(make_move(cell as u8, (cell + 7) as u8))?;
    }
    if is_capture(board, board >> ((cell + 9) * 4)) {
        moves.push(make_move(cell as u8, (cell + 9) as u8))?;
    }
    Ok(())
}
