//! Ability errors.

use scacco_core::Square;

use crate::abilities::AbilityKind;

/// Errors from misusing a survival ability.
///
/// Unlike ordinary moves, ability requests name a specific effect, so a
/// bad request is worth explaining rather than silently ignoring.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AbilityError {
    /// The ability is still cooling down.
    #[error("{kind} is on cooldown: {remaining} turns remaining")]
    OnCooldown {
        /// Which ability was requested.
        kind: AbilityKind,
        /// Turns until it is available again.
        remaining: u8,
    },
    /// The target square must be empty but is not.
    #[error("target square {square} is occupied")]
    TargetOccupied {
        /// The offending square.
        square: Square,
    },
    /// The target square must hold an enemy piece but does not.
    #[error("no enemy piece on {square}")]
    NoEnemyAt {
        /// The offending square.
        square: Square,
    },
    /// The game is already over.
    #[error("game is over")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::AbilityError;
    use crate::abilities::AbilityKind;
    use scacco_core::Square;

    #[test]
    fn display() {
        let err = AbilityError::OnCooldown {
            kind: AbilityKind::Teleport,
            remaining: 2,
        };
        assert_eq!(format!("{err}"), "teleport is on cooldown: 2 turns remaining");

        let err = AbilityError::NoEnemyAt {
            square: Square::at(4, 4).unwrap(),
        };
        assert_eq!(format!("{err}"), "no enemy piece on e4");
    }
}
