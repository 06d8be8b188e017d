//! Legality filtering: pseudo-legal moves minus those that leave the
//! mover's own king in check.

use crate::board::Board;
use crate::check::is_in_check;
use crate::chess_move::Move;
use crate::movegen::pseudo_legal_moves;
use crate::square::Square;

/// Return the legal moves for the piece on `from`.
///
/// Each pseudo-legal candidate is applied to a copy of the position and
/// discarded if the resulting position leaves the mover in check. The
/// original board is never modified. Order is generation order — the
/// documented contract for callers that number moves in a UI — not
/// rank/file order.
pub fn legal_moves(board: &Board, from: Square) -> Vec<Move> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    pseudo_legal_moves(board, from)
        .into_iter()
        .filter(|&mv| !is_in_check(&board.apply(mv), piece.color()))
        .collect()
}
