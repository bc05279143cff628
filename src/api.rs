//! Public surface offered to any host embedding this crate.
//!
//! A thin re-export layer: every function here is implemented in its own module and
//! re-exported unchanged, so this file stays a stable map from the external
//! interface to where each operation actually lives.

pub use crate::board::{apply_move, rotate};
pub use crate::evaluation::evaluate_move;
pub use crate::legality::is_legal_move;
pub use crate::move_gen::generate_moves;
pub use crate::search::{nega_max, search_move};
