//! Core board-game rules: position representation, move generation,
//! check detection, legality filtering, and checkmate evaluation.

mod apply;
mod board;
mod check;
mod chess_move;
mod color;
mod error;
mod legality;
mod mate;
mod movegen;
mod piece;
mod piece_kind;
mod square;

pub use board::{Board, PrettyBoard};
pub use check::is_in_check;
pub use chess_move::Move;
pub use color::Color;
pub use error::BoardError;
pub use legality::legal_moves;
pub use mate::is_checkmate;
pub use movegen::{PROMOTION_KINDS, pseudo_legal_moves};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
