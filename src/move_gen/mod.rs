//! Pseudo-legal move generation.
//!
//! `generate_moves` walks the 36 playable squares in 6x6 index order, and for each
//! square holding a mover-owned piece, dispatches to the per-kind generator below.
//! Pseudo-legal here means geometrically legal, bounds-respecting, and not
//! self-capturing; king safety is *not* enforced: a generated move may leave the
//! mover's own king capturable next ply. That is filtered downstream, by
//! [`crate::search`]'s king-capture short-circuit or by [`crate::legality`].
//!
//! ## Module Organization
//!
//! - `pawn` - single/double push and diagonal captures
//! - `knight` - fixed relative-offset jumps
//! - `king` - fixed relative-offset steps
//! - `sliding` - shared ray-walking logic for rooks, bishops, and queens
//! - `rook`, `bishop`, `queen` - the direction sets each slider walks

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;

use crate::board::{adjusted_index, piece_at};
use crate::error::ChessCoreResult;
use crate::types::{Board, MoveList, PieceKind};

/// Generate every pseudo-legal move available to the side to move.
///
/// Iterates `k = 0..36` via [`adjusted_index`]; for each square owned by the mover,
/// appends that piece's moves in generation order. Fails with
/// [`crate::error::ChessCoreError::CapacityExceeded`] if more than
/// [`MoveList::CAPACITY`] moves would be produced.
pub fn generate_moves(board: Board) -> ChessCoreResult<MoveList> {
    let mut moves = MoveList::new();
    let mover = (board & primitive_types::U256::one()).as_u32() as u8;

    for k in 0..36usize {
        let cell = adjusted_index(k);
        let piece = piece_at(board, cell);
        if piece == 0 {
            continue;
        }
        if (piece >> 3) != mover {
            continue;
        }
        let kind = match PieceKind::from_nibble(piece) {
            Some(kind) => kind,
            None => continue,
        };
        match kind {
            PieceKind::Pawn => pawn::generate(board, cell, &mut moves)?,
            PieceKind::Knight => knight::generate(board, cell, &mut moves)?,
            PieceKind::King => king::generate(board, cell, &mut moves)?,
            PieceKind::Bishop => bishop::generate(board, cell, &mut moves)?,
            PieceKind::Rook => rook::generate(board, cell, &mut moves)?,
            PieceKind::Queen => queen::generate(board, cell, &mut moves)?,
        }
    }

    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::starting_position;

    #[test]
    fn starting_position_generates_only_pawn_and_knight_moves() {
        let moves = generate_moves(starting_position()).unwrap();
        assert!(!moves.is_empty());
        // 6 pawns, each with a single and double push = 12 pawn moves; 2 knights,
        // each with 2 onto-board jumps on an empty 6x6 board = 4 knight moves.
        assert_eq!(moves.len(), 16, "unexpected move count from starting position");
    }

    #[test]
    fn generator_is_deterministic() {
        let b = starting_position();
        let a = generate_moves(b).unwrap();
        let c = generate_moves(b).unwrap();
        assert_eq!(a.as_slice(), c.as_slice());
    }
}
