//! Move application via copy-make.

use tracing::warn;

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;

impl Board {
    /// Apply a move and return the resulting board. Copy-make: `self` is
    /// never modified, so speculative trials need no undo path — the
    /// original position stays intact on every exit.
    ///
    /// Any occupant of the destination square is removed (capture), the
    /// piece relocates from the source, and a promotion move replaces
    /// the piece's kind.
    pub fn apply(&self, mv: Move) -> Board {
        let mut next = self.clone();
        let Some(piece) = next.remove(mv.source()) else {
            warn!(%mv, "apply called with an empty source square");
            return next;
        };

        let placed = match mv.promotion() {
            Some(kind) => Piece::new(kind, piece.color()),
            None => piece,
        };
        next.place(mv.dest(), placed);
        next
    }
}
