//! Turn controller for standard chess.

use tracing::{debug, info};

use scacco_core::{Board, Color, Move, Piece, PieceKind, Square, is_checkmate, legal_moves};

use crate::outcome::{GameOverReason, MoveOutcome};

/// Owns the board and the side to move, validates incoming moves, and
/// reports outcomes to the presentation layer.
///
/// The presentation layer translates pixel/window coordinates into
/// (file, rank) squares itself; this controller only ever sees squares.
pub struct ChessGame {
    board: Board,
    side_to_move: Color,
    game_over: Option<GameOverReason>,
}

impl ChessGame {
    /// Create a game in the standard starting position, Light to move.
    pub fn new() -> ChessGame {
        ChessGame {
            board: Board::standard(),
            side_to_move: Color::Light,
            game_over: None,
        }
    }

    /// Return the current position.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return `true` if the game has ended.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    /// Return why the game ended, if it has.
    #[inline]
    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over
    }

    /// Return the legal moves for the piece on `from`, for move
    /// highlighting. Order is generation order (the contract UIs use
    /// for move numbering), and empty once the game is over.
    pub fn legal_moves(&self, from: Square) -> Vec<Move> {
        if self.game_over.is_some() {
            return Vec::new();
        }
        legal_moves(&self.board, from)
    }

    /// Attempt to move the piece on `from` to `to`.
    ///
    /// Rejections (empty source, wrong side's piece, illegal
    /// destination, game already over) are no-ops reported with
    /// `applied = false`. A legal move is applied, the turn flips, and
    /// the new side to move is probed for checkmate. Pawns reaching the
    /// far rank promote to a queen; callers wanting underpromotion
    /// build `Move` values against the core directly.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        if self.game_over.is_some() {
            debug!(%from, %to, "move rejected: game is over");
            return MoveOutcome::rejected();
        }

        match self.board.piece_at(from) {
            Some(piece) if piece.color() == self.side_to_move => {}
            Some(_) => {
                debug!(%from, side = %self.side_to_move, "move rejected: not the mover's piece");
                return MoveOutcome::rejected();
            }
            None => {
                debug!(%from, "move rejected: empty source square");
                return MoveOutcome::rejected();
            }
        }

        let Some(mv) = legal_moves(&self.board, from)
            .into_iter()
            .find(|mv| {
                mv.dest() == to && mv.promotion().is_none_or(|kind| kind == PieceKind::Queen)
            })
        else {
            debug!(%from, %to, "move rejected: destination not legal");
            return MoveOutcome::rejected();
        };

        let captured = self.board.piece_at(to);
        self.board = self.board.apply(mv);
        let mover = self.side_to_move;
        self.side_to_move = mover.flip();

        let mate = is_checkmate(&self.board, self.side_to_move);
        if mate {
            info!(winner = %mover, "checkmate");
            self.game_over = Some(GameOverReason::Checkmate { winner: mover });
        }

        debug!(%mv, captured = ?captured, "move applied");
        MoveOutcome {
            applied: true,
            captured,
            promoted: mv.is_promotion(),
            opponent_in_checkmate: mate,
        }
    }

    /// Signal that the external per-move countdown expired.
    pub fn expire_timer(&mut self) {
        if self.game_over.is_none() {
            info!("timer expired");
            self.game_over = Some(GameOverReason::TimeExpired);
        }
    }

    /// Discard the current game and restore the starting layout, with
    /// Light to move.
    pub fn reset(&mut self) {
        info!("game reset");
        *self = ChessGame::new();
    }
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}
