//! Cooldown-gated player abilities for the survival variant.

use std::fmt;

use crate::error::AbilityError;

/// The four player abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AbilityKind {
    /// Move the player to any empty square.
    Teleport = 0,
    /// Exchange squares with an enemy piece.
    Swap = 1,
    /// Absorb the next enemy capture of the player.
    Shield = 2,
    /// Remove an enemy piece from the board.
    Destroy = 3,
}

impl AbilityKind {
    /// Total number of abilities.
    pub const COUNT: usize = 4;

    /// All abilities in index order.
    pub const ALL: [AbilityKind; 4] = [
        AbilityKind::Teleport,
        AbilityKind::Swap,
        AbilityKind::Shield,
        AbilityKind::Destroy,
    ];

    /// Return the index (0..4).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Turns an ability stays unavailable after use.
    #[inline]
    pub const fn cooldown(self) -> u8 {
        match self {
            AbilityKind::Teleport => 3,
            AbilityKind::Swap => 4,
            AbilityKind::Shield => 5,
            AbilityKind::Destroy => 8,
        }
    }
}

impl fmt::Display for AbilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AbilityKind::Teleport => "teleport",
            AbilityKind::Swap => "swap",
            AbilityKind::Shield => "shield",
            AbilityKind::Destroy => "destroy",
        };
        write!(f, "{name}")
    }
}

/// Per-ability cooldown counters, ticked once per completed turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbilitySet {
    cooldowns: [u8; AbilityKind::COUNT],
}

impl AbilitySet {
    /// Create a set with every ability available.
    pub fn new() -> AbilitySet {
        AbilitySet::default()
    }

    /// Return `true` if the ability can be used now.
    #[inline]
    pub fn is_available(&self, kind: AbilityKind) -> bool {
        self.cooldowns[kind.index()] == 0
    }

    /// Return the remaining cooldown in turns (0 = available).
    #[inline]
    pub fn remaining(&self, kind: AbilityKind) -> u8 {
        self.cooldowns[kind.index()]
    }

    /// Consume an ability, starting its cooldown.
    pub(crate) fn engage(&mut self, kind: AbilityKind) -> Result<(), AbilityError> {
        let remaining = self.cooldowns[kind.index()];
        if remaining > 0 {
            return Err(AbilityError::OnCooldown { kind, remaining });
        }
        self.cooldowns[kind.index()] = kind.cooldown();
        Ok(())
    }

    /// Advance all cooldowns by one turn.
    pub(crate) fn tick(&mut self) {
        for cooldown in &mut self.cooldowns {
            *cooldown = cooldown.saturating_sub(1);
        }
    }
}
