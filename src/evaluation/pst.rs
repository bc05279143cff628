//! Single-entry piece-square table reads.
//!
//! Pawn/bishop/knight/rook tables are one packed 256-bit word each, 7-bit entries,
//! entry `k` at bit offset `7*(35-k)` (entry 35 sits in the least-significant bits).
//! Queen/king tables are split across a near word (`k < 18`, entry `k` at
//! `12*(17-k)`) and a far word (`k >= 18`, entry `k` at `12*(35-k)`), 12-bit entries.

use crate::constants::{
    BISHOP_PST, KING_PST_FAR, KING_PST_NEAR, KNIGHT_PST, PAWN_PST, QUEEN_PST_FAR,
    QUEEN_PST_NEAR, ROOK_PST,
};
use crate::types::PieceKind;
use primitive_types::U256;

const ROYAL_HALF_BOUNDARY: u32 = 18;

/// Read `bits` bits of `word` at signed bit offset `offset`.
///
/// A negative offset, or one at or past the word's width, is the "shift underflows
/// and the field reads as zero" case, not an error: the faithfully-reproduced
/// bug's actual numeric consequence, handled here rather than only inside
/// [`read_with_branch`] so both paths share one rule.
fn read_word(word: U256, offset: i64, bits: u32) -> i32 {
    if offset < 0 || offset >= 256 {
        return 0;
    }
    let mask = (U256::one() << bits) - U256::one();
    ((word >> (offset as u32)) & mask).as_u32() as i32
}

fn near_far(kind: PieceKind) -> (U256, U256) {
    match kind {
        PieceKind::Queen => (QUEEN_PST_NEAR, QUEEN_PST_FAR),
        PieceKind::King => (KING_PST_NEAR, KING_PST_FAR),
        _ => unreachable!("near_far is only meaningful for queen/king"),
    }
}

/// Correct, independent-per-square PST read (default behaviour).
pub fn read(kind: PieceKind, k: u32) -> i32 {
    match kind {
        PieceKind::Pawn => read_word(PAWN_PST, 7 * (35 - k as i64), 7),
        PieceKind::Bishop => read_word(BISHOP_PST, 7 * (35 - k as i64), 7),
        PieceKind::Knight => read_word(KNIGHT_PST, 7 * (35 - k as i64), 7),
        PieceKind::Rook => read_word(ROOK_PST, 7 * (35 - k as i64), 7),
        PieceKind::Queen | PieceKind::King => {
            let (near, far) = near_far(kind);
            if k < ROYAL_HALF_BOUNDARY {
                read_word(near, 12 * (17 - k as i64), 12)
            } else {
                read_word(far, 12 * (35 - k as i64), 12)
            }
        }
    }
}

/// Buggy read behind `legacy_pst_bug`: the table half (near vs far) is chosen by
/// `branch_k`, but the bit offset within that table is computed from `read_k`. When
/// the two disagree on which half they belong to, the resulting offset is always
/// negative or past the word's width, so this always reads as zero in that case.
/// That degenerate outcome is the bug, not a bolt-on special case.
pub fn read_with_branch(kind: PieceKind, branch_k: u32, read_k: u32) -> i32 {
    let (near, far) = near_far(kind);
    if branch_k < ROYAL_HALF_BOUNDARY {
        read_word(near, 12 * (17 - read_k as i64), 12)
    } else {
        read_word(far, 12 * (35 - read_k as i64), 12)
    }
}
