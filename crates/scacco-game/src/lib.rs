//! Game controllers built on scacco-core: the standard chess turn
//! controller and the knight-survival variant.

pub mod abilities;
pub mod chess;
pub mod error;
pub mod outcome;
pub mod survival;

pub use abilities::{AbilityKind, AbilitySet};
pub use chess::ChessGame;
pub use error::AbilityError;
pub use outcome::{GameOverReason, MoveOutcome};
pub use survival::{MAX_ENEMIES, SurvivalGame, TurnOutcome};
