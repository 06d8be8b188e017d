//! Board squares as (file, rank) coordinates.

use std::fmt;

/// A square on the 8x8 board, encoded as a `u8` (index = rank * 8 + file).
///
/// Files and ranks are zero-indexed 0..8. Rank 0 is the dark back rank,
/// rank 7 the light back rank, so light pawns advance toward decreasing
/// rank and dark pawns toward increasing rank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from file and rank, returning `None` if either is
    /// outside 0..8.
    #[inline]
    pub const fn at(file: u8, rank: u8) -> Option<Square> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Create a square from coordinates known to be in range.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `file < 8 && rank < 8`.
    #[inline]
    pub(crate) const fn at_unchecked(file: u8, rank: u8) -> Square {
        debug_assert!(file < 8 && rank < 8);
        Square(rank * 8 + file)
    }

    /// Return the file (0..8).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Return the rank (0..8).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Return the square displaced by `(df, dr)`, or `None` if the result
    /// falls outside the board. Out-of-bounds targets are rejected here,
    /// before any occupancy check elsewhere.
    #[inline]
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let file = self.file() as i8 + df;
        let rank = self.rank() as i8 + dr;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::at_unchecked(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    /// Algebraic-style output for logs and tests: file as a letter, rank
    /// counted upward from the light back rank ("a1" = (0, 7)).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_char = (b'a' + self.file()) as char;
        write!(f, "{}{}", file_char, 8 - self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.file(), self.rank())
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn at_and_accessors() {
        let sq = Square::at(4, 6).unwrap();
        assert_eq!(sq.file(), 4);
        assert_eq!(sq.rank(), 6);
    }

    #[test]
    fn at_rejects_out_of_range() {
        assert!(Square::at(8, 0).is_none());
        assert!(Square::at(0, 8).is_none());
        assert!(Square::at(255, 255).is_none());
    }

    #[test]
    fn file_rank_roundtrip() {
        for sq in Square::all() {
            let reconstructed = Square::at(sq.file(), sq.rank()).unwrap();
            assert_eq!(sq, reconstructed);
        }
    }

    #[test]
    fn offset_in_bounds() {
        let sq = Square::at(4, 4).unwrap();
        assert_eq!(sq.offset(2, 1), Square::at(6, 5));
        assert_eq!(sq.offset(-2, -1), Square::at(2, 3));
        assert_eq!(sq.offset(0, 0), Some(sq));
    }

    #[test]
    fn offset_out_of_bounds() {
        let corner = Square::at(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(8, 0), None);
    }

    #[test]
    fn all_iterator_count() {
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn display_algebraic() {
        assert_eq!(format!("{}", Square::at(0, 7).unwrap()), "a1");
        assert_eq!(format!("{}", Square::at(4, 4).unwrap()), "e4");
        assert_eq!(format!("{}", Square::at(7, 0).unwrap()), "h8");
    }

    #[test]
    fn debug_shows_coordinates() {
        assert_eq!(format!("{:?}", Square::at(4, 6).unwrap()), "Square(4, 6)");
    }
}
