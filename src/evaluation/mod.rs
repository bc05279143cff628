//! Move evaluation via piece-square tables.
//!
//! Unlike a conventional position evaluator that sums material plus placement over
//! every piece on the board, this one scores a single candidate *move*: the change
//! in placement value for the piece that moved, plus the placement value of
//! whatever it captured. There is no separate material term; reference piece
//! values only enter through [`crate::search`]'s king-capture short-circuit, not
//! through evaluation.
//!
//! ## Module Organization
//!
//! - `pst` - the kind/half dispatch that reads one packed PST entry
//! - `delta` - `evaluate_move` itself, including the reproducible queen/king bug

mod delta;
mod pst;

pub use delta::evaluate_move;
