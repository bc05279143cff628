//! Knight move generation: fixed relative-offset jumps.

use crate::board::is_valid;
use crate::constants::KNIGHT_DELTAS;
use crate::error::ChessCoreResult;
use crate::types::{make_move, Board, MoveList};

/// The eight `cell ± delta` jumps for `delta` in [`KNIGHT_DELTAS`], least-significant
/// delta first.
pub fn generate(board: Board, cell: u32, moves: &mut MoveList) -> ChessCoreResult<()> {
    for &delta in KNIGHT_DELTAS.iter() {
        let forward = cell as i32 + delta as i32;
        if is_valid(board, forward) {
            moves.push(make_move(cell as u8, forward as u8))?;
        }
        if delta <= cell {
            let backward = cell as i32 - delta as i32;
            if is_valid(board, backward) {
                moves.push(make_move(cell as u8, backward as u8))?;
            }
        }
    }
    Ok(())
}
