//! `evaluate_move`: score a single candidate move from the mover's perspective.

use super::pst;
use crate::board::{piece_at, to_6x6_index};
use crate::types::{split_move, Board, MoveWord, PieceKind};

/// `Δ(PST of moved piece) + (PST of captured piece at destination)`.
///
/// Both PST reads for the moving piece use its own kind; the captured piece (if
/// any) is scored by its own kind independently. With the `legacy_pst_bug` feature
/// enabled, the moving piece's *new* placement value is read the way the original
/// engine reads it: using the *source* square's half of the queen/king table even
/// when the move crosses into the other half, instead of the corrected,
/// independently-dispatched read this crate uses by default.
pub fn evaluate_move(board: Board, mv: MoveWord) -> i32 {
    let (from_cell, to_cell) = split_move(mv);
    let (from_cell, to_cell) = (from_cell as u32, to_cell as u32);
    let from_k = to_6x6_index(from_cell);
    let to_k = to_6x6_index(to_cell);

    let mover_piece = piece_at(board, from_cell);
    let mover_kind = match PieceKind::from_nibble(mover_piece) {
        Some(kind) => kind,
        None => return 0,
    };

    let dest_piece = piece_at(board, to_cell);
    let capture = if dest_piece == 0 {
        0
    } else {
        match PieceKind::from_nibble(dest_piece) {
            Some(kind) => pst::read(kind, to_k),
            None => 0,
        }
    };

    let old_pst = pst::read(mover_kind, from_k);
    let new_pst = new_placement_value(mover_kind, from_k, to_k);

    (capture + new_pst) - old_pst
}

#[cfg(feature = "legacy_pst_bug")]
fn new_placement_value(kind: PieceKind, from_k: u32, to_k: u32) -> i32 {
    match kind {
        PieceKind::Queen | PieceKind::King => pst::read_with_branch(kind, from_k, to_k),
        _ => pst::read(kind, to_k),
    }
}

#[cfg(not(feature = "legacy_pst_bug"))]
fn new_placement_value(kind: PieceKind, _from_k: u32, to_k: u32) -> i32 {
    pst::read(kind, to_k)
}
