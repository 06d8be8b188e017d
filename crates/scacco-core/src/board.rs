//! The board: a sparse mapping from squares to pieces.

use std::collections::HashMap;
use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Piece placement for one position.
///
/// Squares absent from the map are empty; at most one piece occupies a
/// square. The board is a pure container: it performs no move
/// validation. Side to move belongs to the game controllers, not here.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Board {
    squares: HashMap<Square, Piece>,
}

impl Board {
    /// Return an empty board.
    pub fn empty() -> Board {
        Board {
            squares: HashMap::new(),
        }
    }

    /// Return the standard chess starting position.
    ///
    /// Dark pieces on ranks 0-1, light pieces on ranks 6-7; queens on
    /// file 3, kings on file 4.
    pub fn standard() -> Board {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for file in 0..8 {
            let kind = BACK_RANK[file as usize];
            board.place(Square::at_unchecked(file, 0), Piece::new(kind, Color::Dark));
            board.place(Square::at_unchecked(file, 1), Piece::DARK_PAWN);
            board.place(Square::at_unchecked(file, 6), Piece::LIGHT_PAWN);
            board.place(Square::at_unchecked(file, 7), Piece::new(kind, Color::Light));
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares.get(&sq).copied()
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares.contains_key(&sq)
    }

    /// Put a piece on a square, replacing any previous occupant.
    #[inline]
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.squares.insert(sq, piece);
    }

    /// Clear a square, returning its previous occupant.
    #[inline]
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares.remove(&sq)
    }

    /// Return the number of pieces on the board.
    #[inline]
    pub fn piece_count(&self) -> usize {
        self.squares.len()
    }

    /// Iterate over all occupied squares, in no particular order.
    pub fn occupied_squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.squares.keys().copied()
    }

    /// Return the squares holding pieces of the given color.
    pub fn squares_of(&self, color: Color) -> Vec<Square> {
        self.squares
            .iter()
            .filter(|(_, piece)| piece.color() == color)
            .map(|(&sq, _)| sq)
            .collect()
    }

    /// Return the square of the king for the given side.
    ///
    /// # Panics
    ///
    /// Panics if the board has no king for the given color. A missing
    /// king means setup or promotion logic is broken; callers working
    /// with kingless positions (the survival variant) must not invoke
    /// check detection at all.
    pub fn king_square(&self, color: Color) -> Square {
        self.squares
            .iter()
            .find(|(_, piece)| piece.kind() == PieceKind::King && piece.color() == color)
            .map(|(&sq, _)| sq)
            .expect("board must have a king for each side")
    }

    /// Validate the structural integrity of a standard-chess position.
    pub fn validate(&self) -> Result<(), BoardError> {
        // Exactly one king per side
        for color in Color::ALL {
            let king_count = self
                .squares
                .values()
                .filter(|piece| piece.kind() == PieceKind::King && piece.color() == color)
                .count();
            if king_count != 1 {
                let color_name = match color {
                    Color::Light => "light",
                    Color::Dark => "dark",
                };
                return Err(BoardError::InvalidKingCount {
                    color: color_name,
                    count: king_count,
                });
            }
        }

        // No pawns on rank 0 or rank 7
        let pawn_on_terminal = self.squares.iter().any(|(sq, piece)| {
            piece.kind() == PieceKind::Pawn && (sq.rank() == 0 || sq.rank() == 7)
        });
        if pawn_on_terminal {
            return Err(BoardError::PawnsOnTerminalRank);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pieces: Vec<_> = self.squares.iter().collect();
        pieces.sort_by_key(|&(&sq, _)| sq);
        f.debug_map().entries(pieces).finish()
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0u8..8 {
            write!(f, "{}  ", 8 - rank)?;
            for file in 0u8..8 {
                let sq = Square::at_unchecked(file, rank);
                let c = match self.0.piece_at(sq) {
                    Some(piece) => piece.symbol(),
                    None => '.',
                };
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
