//! Colored pieces.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored piece. Pieces are plain values stored at board squares;
/// they carry no identity beyond kind and color.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
}

impl Piece {
    /// All 12 valid pieces (Light 0-5, Dark 6-11 by index).
    pub const COUNT: usize = 12;

    pub const LIGHT_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Light);
    pub const LIGHT_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Light);
    pub const LIGHT_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Light);
    pub const LIGHT_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Light);
    pub const LIGHT_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Light);
    pub const LIGHT_KING: Piece = Piece::new(PieceKind::King, Color::Light);

    pub const DARK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Dark);
    pub const DARK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Dark);
    pub const DARK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Dark);
    pub const DARK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Dark);
    pub const DARK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Dark);
    pub const DARK_KING: Piece = Piece::new(PieceKind::King, Color::Dark);

    /// All 12 pieces: Light pieces followed by Dark pieces.
    pub const ALL: [Piece; 12] = [
        Self::LIGHT_PAWN,
        Self::LIGHT_KNIGHT,
        Self::LIGHT_BISHOP,
        Self::LIGHT_ROOK,
        Self::LIGHT_QUEEN,
        Self::LIGHT_KING,
        Self::DARK_PAWN,
        Self::DARK_KNIGHT,
        Self::DARK_BISHOP,
        Self::DARK_ROOK,
        Self::DARK_QUEEN,
        Self::DARK_KING,
    ];

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the color.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return a contiguous index 0-11 for use in fixed-size arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self.color.index() * PieceKind::COUNT + self.kind.index()
    }

    /// Return the symbol for this piece: uppercase for Light, lowercase
    /// for Dark.
    #[inline]
    pub fn symbol(self) -> char {
        let base = self.kind.symbol();
        match self.color {
            Color::Light => base.to_ascii_uppercase(),
            Color::Dark => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::Light => 'L',
            Color::Dark => 'D',
        };
        write!(f, "{}{}", color_prefix, self.kind.symbol().to_ascii_uppercase())
    }
}
