//! King move generation: fixed relative-offset single steps.
//!
//! Same dispatch shape as knight generation, just with a different delta set and a
//! one-square instead of a two-plus-one reach. No castling: the variant this core
//! implements has no rook/king-unmoved state to track in the first place.

use crate::board::is_valid;
use crate::constants::KING_DELTAS;
use crate::error::ChessCoreResult;
use crate::types::{make_move, Board, MoveList};

pub fn generate(board: Board, cell: u32, moves: &mut MoveList) -> ChessCoreResult<()> {
    for &delta in KING_DELTAS.iter() {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::starting_position;

    #[test]
    fn king_on_the_back_rank_has_no_moves_behind_its_own_pawns() {
        let b = starting_position();
        let mut moves = MoveList::new();
        generate(b, 12, &mut moves).unwrap();
        assert!(moves.is_empty());
    }
}
