//! Checkmate evaluation.

use crate::board::Board;
use crate::check::is_in_check;
use crate::color::Color;
use crate::legality::legal_moves;

/// Return `true` if `color` is checkmated: currently in check with no
/// legal move from any of its pieces.
///
/// A side that is not in check is never checkmated, even with zero
/// legal moves — stalemate is not evaluated as a distinct terminal
/// state. Cost is O(pieces x moves-per-piece x check-detection), which
/// is fine at 8x8 scale.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    if !is_in_check(board, color) {
        return false;
    }
    board
        .squares_of(color)
        .into_iter()
        .all(|from| legal_moves(board, from).is_empty())
}
