//! Error types for the chess core
//!
//! Three kinds only: malformed input, move-generator capacity overflow, and
//! nothing else. `is_legal_move` returning `false` is a normal outcome, not an error.

use thiserror::Error;

/// Errors that can occur in the chess core.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessCoreError {
    /// A cell index named by a move or query fell outside the 8x8 word (`0..64`).
    #[error("cell index {cell} is out of bounds (must be 0-63)")]
    CellOutOfBounds { cell: u32 },

    /// A board word failed the sentinel invariant: some bit in a sentinel rail cell
    /// was set other than bit 0 of cell 0 (the turn flag).
    #[error("board violates the sentinel invariant at cell {cell}")]
    SentinelViolation { cell: u32 },

    /// A cell nibble's low 3 bits named an undefined piece kind (0 with colour bit
    /// set, or the unused value 7).
    #[error("cell {cell} holds an invalid piece kind (raw nibble {nibble:#x})")]
    InvalidPieceKind { cell: u32, nibble: u8 },

    /// `search_move` was called with `depth < 3`; own-side mates are not reliably
    /// detectable below that.
    #[error("search_move requires depth >= 3, got {depth}")]
    SearchDepthTooShallow { depth: u32 },

    /// Move generation produced more candidates than [`crate::types::MoveList`] can
    /// hold. Treated as a first-class, reachable error, not a panic.
    #[error("move generation exceeded capacity ({attempted} candidates)")]
    CapacityExceeded { attempted: usize },
}

/// Result type alias for chess core operations.
pub type ChessCoreResult<T> = Result<T, ChessCoreError>;
