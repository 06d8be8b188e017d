//! Outcome values reported across the game boundary.
//!
//! Illegality is data, not control flow: a rejected move comes back as
//! `applied = false`, never as an error crossing the boundary.

use scacco_core::{Color, Piece};

/// Result of a single attempted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the move was applied. `false` means the request was a
    /// no-op: empty source, wrong side's piece, or illegal destination.
    pub applied: bool,
    /// The piece captured by this move, if any.
    pub captured: Option<Piece>,
    /// Whether the move promoted a pawn.
    pub promoted: bool,
    /// Whether the move checkmated the opponent.
    pub opponent_in_checkmate: bool,
}

impl MoveOutcome {
    /// A rejected move: nothing happened.
    pub(crate) const fn rejected() -> MoveOutcome {
        MoveOutcome {
            applied: false,
            captured: None,
            promoted: false,
            opponent_in_checkmate: false,
        }
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// A side was checkmated (standard chess).
    Checkmate {
        /// The side that delivered mate.
        winner: Color,
    },
    /// The external per-move countdown ran out.
    TimeExpired,
    /// The player's piece was captured (survival variant).
    Captured,
}
