//! Check detection.

use crate::board::Board;
use crate::color::Color;
use crate::movegen::pseudo_legal_moves;
use crate::square::Square;

/// Return `true` if `color`'s king is attacked.
///
/// Attack is defined as pseudo-legal reachability: the king square is a
/// destination of at least one opposing piece's pseudo-legal moves.
///
/// # Panics
///
/// Panics if the board has no king of the given color. Kingless
/// positions (the survival variant) must never call this.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let king_sq = board.king_square(color);
    attacks_square(board, color.flip(), king_sq)
}

/// Return `true` if any piece of `attacker` pseudo-legally reaches `target`.
fn attacks_square(board: &Board, attacker: Color, target: Square) -> bool {
    board.squares_of(attacker).into_iter().any(|from| {
        pseudo_legal_moves(board, from)
            .into_iter()
            .any(|mv| mv.dest() == target)
    })
}
