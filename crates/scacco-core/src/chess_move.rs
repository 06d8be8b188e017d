//! Move representation.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A move from one square to another, with an optional promotion kind.
///
/// Applying a move to a board removes any occupant of the destination
/// (capture), relocates the piece from the source, and replaces a pawn
/// reaching the far rank with its promotion kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
    promotion: Option<PieceKind>,
}

impl Move {
    /// Create a normal (quiet or capture) move.
    #[inline]
    pub const fn new(source: Square, dest: Square) -> Move {
        Move {
            source,
            dest,
            promotion: None,
        }
    }

    /// Create a promotion move.
    #[inline]
    pub const fn new_promotion(source: Square, dest: Square, kind: PieceKind) -> Move {
        Move {
            source,
            dest,
            promotion: Some(kind),
        }
    }

    /// Return the source square.
    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    /// Return the destination square.
    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    /// Return the promotion kind, if any.
    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    /// Return `true` if this is a promotion move.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}
