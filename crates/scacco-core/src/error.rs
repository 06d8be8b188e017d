//! Error types for board validation.

/// Errors from structural validation of a [`Board`](crate::board::Board).
///
/// These indicate a malformed position — a bug in setup or promotion
/// handling, never a user mistake. Illegal *moves* are not errors; they
/// are reported as data by the boundary layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: usize,
    },
    /// Pawns occupy rank 0 or rank 7, where they must have promoted.
    #[error("pawns found on a terminal rank")]
    PawnsOnTerminalRank,
}
