//! Shared ray-walking logic for rooks, bishops, and queens.
//!
//! Each direction is walked independently: step while the next cell is valid,
//! appending a move each time, and stop the ray as soon as a capture is appended
//! (the piece cannot slide past the piece it just took).

use crate::board::is_capture;
use crate::error::ChessCoreResult;
use crate::types::{make_move, Board, MoveList};

/// Walk every direction in `rays` from `cell`, appending moves until each ray runs
/// off the board, hits a same-colour piece, or captures.
///
/// `skip_step` lets bishop/queen generation veto an individual step, used to
/// implement the `-9` diagonal's cell-0 edge case: stepping onto cell 0
/// would read the side-to-move bit as if it were an opposing piece, so that single
/// step is rejected before the normal `is_valid` check ever runs.
pub fn generate<F>(
    board: Board,
    cell: u32,
    rays: &[i32],
    moves: &mut MoveList,
    skip_step: F,
) -> ChessCoreResult<()>
where
    F: Fn(i32) -> bool,
{
    for &dir in rays {
        let mut current = cell as i32;
        loop {
            let next = current + dir;
            if skip_step(next) {
                break;
            }
            if !crate::board::is_valid(board, next) {
                break;
            }
            current = next;
            moves.push(make_move(cell as u8, current as u8))?;
            if is_capture(board, board >> ((current as u32) * 4)) {
                break;
            }
        }
    }
    Ok(())
}
