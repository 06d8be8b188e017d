//! Pseudo-legal move generation.
//!
//! A pseudo-legal move obeys a piece's movement geometry and basic
//! occupancy rules, without regard to whether it exposes the mover's
//! own king. Each piece kind maps to a single [`MovePattern`]
//! descriptor, so the step-set and ray-casting walkers are written
//! once. Castling and en passant are not part of the rule set.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Promotion choices offered when a pawn reaches the far rank.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

const KNIGHT_STEPS: [(i8, i8); 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (1, -2), (-1, 2), (-1, -2),
];

const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const ALL_DIRS: [(i8, i8); 8] = [
    (1, 1), (1, -1), (-1, 1), (-1, -1),
    (1, 0), (-1, 0), (0, 1), (0, -1),
];

/// Movement geometry for one piece kind: a fixed set of single steps,
/// rays extended until a blocker, or the pawn special case.
enum MovePattern {
    Steps(&'static [(i8, i8)]),
    Rays(&'static [(i8, i8)]),
    Pawn,
}

const fn pattern_for(kind: PieceKind) -> MovePattern {
    match kind {
        PieceKind::Pawn => MovePattern::Pawn,
        PieceKind::Knight => MovePattern::Steps(&KNIGHT_STEPS),
        PieceKind::Bishop => MovePattern::Rays(&DIAGONAL_DIRS),
        PieceKind::Rook => MovePattern::Rays(&ORTHOGONAL_DIRS),
        PieceKind::Queen => MovePattern::Rays(&ALL_DIRS),
        PieceKind::King => MovePattern::Steps(&KING_STEPS),
    }
}

/// Rank direction a pawn of `color` advances in.
const fn pawn_advance(color: Color) -> i8 {
    match color {
        Color::Light => -1,
        Color::Dark => 1,
    }
}

/// Starting rank from which a pawn may advance two squares.
const fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::Light => 6,
        Color::Dark => 1,
    }
}

/// The rank on which a pawn of `color` promotes.
const fn far_rank(color: Color) -> u8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

/// Generate the pseudo-legal moves for the piece on `from`.
///
/// Returns an empty list when the square is empty. Callers that need
/// full legality (no self-check) go through
/// [`legal_moves`](crate::legal_moves) instead.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Vec<Move> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    match pattern_for(piece.kind()) {
        MovePattern::Steps(steps) => step_moves(board, from, piece, steps, &mut moves),
        MovePattern::Rays(dirs) => ray_moves(board, from, piece, dirs, &mut moves),
        MovePattern::Pawn => pawn_moves(board, from, piece, &mut moves),
    }
    moves
}

/// Fixed-offset movers (knight, king): each in-bounds target is
/// included unless a friendly piece occupies it.
fn step_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    steps: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(df, dr) in steps {
        let Some(dest) = from.offset(df, dr) else {
            continue;
        };
        match board.piece_at(dest) {
            Some(occupant) if occupant.color() == piece.color() => {}
            _ => out.push(Move::new(from, dest)),
        }
    }
}

/// Sliding movers (bishop, rook, queen): each ray extends square by
/// square until the board edge, a friendly piece (excluded), or an
/// enemy piece (included).
fn ray_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    dirs: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(df, dr) in dirs {
        let mut current = from;
        while let Some(dest) = current.offset(df, dr) {
            match board.piece_at(dest) {
                None => {
                    out.push(Move::new(from, dest));
                    current = dest;
                }
                Some(occupant) => {
                    if occupant.color() != piece.color() {
                        out.push(Move::new(from, dest));
                    }
                    break;
                }
            }
        }
    }
}

/// Pawns: one square forward onto an empty square, two from the home
/// rank when both intervening squares are empty, and diagonal captures
/// only onto enemy-occupied squares. No en passant.
fn pawn_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let dr = pawn_advance(piece.color());

    if let Some(one_ahead) = from.offset(0, dr) {
        if !board.is_occupied(one_ahead) {
            push_pawn_move(piece.color(), from, one_ahead, out);
            if from.rank() == pawn_home_rank(piece.color()) {
                if let Some(two_ahead) = one_ahead.offset(0, dr) {
                    if !board.is_occupied(two_ahead) {
                        out.push(Move::new(from, two_ahead));
                    }
                }
            }
        }
    }

    for df in [-1i8, 1] {
        let Some(dest) = from.offset(df, dr) else {
            continue;
        };
        match board.piece_at(dest) {
            Some(occupant) if occupant.color() != piece.color() => {
                push_pawn_move(piece.color(), from, dest, out);
            }
            _ => {}
        }
    }
}

/// Emit a pawn move, expanding it into all promotion choices when the
/// destination is the far rank.
fn push_pawn_move(color: Color, from: Square, dest: Square, out: &mut Vec<Move>) {
    if dest.rank() == far_rank(color) {
        for kind in PROMOTION_KINDS {
            out.push(Move::new_promotion(from, dest, kind));
        }
    } else {
        out.push(Move::new(from, dest));
    }
}
