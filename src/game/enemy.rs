//! Enemy catalog.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use serde::Serialize;

use crate::error::GameError;
use crate::game::Difficulty;

/// The closed set of enemies a level can spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EnemyKind {
    /// Spawned on easy levels.
    Goblin,
    /// Spawned on medium levels.
    Orc,
    /// Spawned on hard levels.
    Dragon,
}

impl EnemyKind {
    /// Every enemy kind, weakest first.
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Goblin, EnemyKind::Orc, EnemyKind::Dragon];

    /// Look up an enemy by its label.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnrecognizedEnemyKind`] if the label is not one of
    /// `Goblin`, `Orc` or `Dragon`.
    pub fn from_label(label: &str) -> Result<Self, GameError> {
        match label {
            "Goblin" => Ok(EnemyKind::Goblin),
            "Orc" => Ok(EnemyKind::Orc),
            "Dragon" => Ok(EnemyKind::Dragon),
            other => Err(GameError::UnrecognizedEnemyKind(other.to_string())),
        }
    }

    /// The enemy that guards a level of the given difficulty.
    #[must_use]
    pub const fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => EnemyKind::Goblin,
            Difficulty::Medium => EnemyKind::Orc,
            Difficulty::Hard => EnemyKind::Dragon,
        }
    }

    /// Catalog label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            EnemyKind::Goblin => "Goblin",
            EnemyKind::Orc => "Orc",
            EnemyKind::Dragon => "Dragon",
        }
    }
}

impl FromStr for EnemyKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A spawned enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    kind: EnemyKind,
}

impl Enemy {
    /// Spawn an enemy of the given kind.
    #[must_use]
    pub const fn spawn(kind: EnemyKind) -> Self {
        Self { kind }
    }

    /// Which kind of enemy this is.
    #[must_use]
    pub const fn kind(self) -> EnemyKind {
        self.kind
    }

    /// Flavor text shown when the enemy appears.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self.kind {
            EnemyKind::Goblin => "A mischievous Goblin armed with a club.",
            EnemyKind::Orc => "A brutish Orc wielding a massive axe.",
            EnemyKind::Dragon => "A fearsome Dragon that scorches everything in its path.",
        }
    }

    /// The line printed when the enemy attacks.
    #[must_use]
    pub const fn attack_message(self) -> &'static str {
        match self.kind {
            EnemyKind::Goblin => "Goblin attacks with a club!",
            EnemyKind::Orc => "Orc swings a massive axe!",
            EnemyKind::Dragon => "Dragon breathes fire!",
        }
    }

    /// Attack, writing the attack line to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn attack<W: Write>(self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.attack_message())
    }
}
