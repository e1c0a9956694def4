//! Item catalog: weapons, power-ups and the strategies that hand them out.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::game::Difficulty;

/// A weapon the player picks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Weapon {
    /// Handed out by the advanced strategy.
    Sword,
    /// Handed out by the defensive strategy.
    Shield,
}

impl Weapon {
    /// The line printed when the weapon is used.
    #[must_use]
    pub const fn use_message(self) -> &'static str {
        match self {
            Weapon::Sword => "Swinging a sword!",
            Weapon::Shield => "Blocking with a shield!",
        }
    }

    /// Use the weapon, writing its message to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn use_on<W: Write>(self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.use_message())
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weapon::Sword => f.write_str("Sword"),
            Weapon::Shield => f.write_str("Shield"),
        }
    }
}

/// A consumable power-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PowerUp {
    /// Handed out by the advanced strategy.
    HealthPotion,
    /// Handed out by the defensive strategy.
    ManaPotion,
}

impl PowerUp {
    /// The line printed when the power-up is applied.
    #[must_use]
    pub const fn apply_message(self) -> &'static str {
        match self {
            PowerUp::HealthPotion => "Restoring health with a potion!",
            PowerUp::ManaPotion => "Replenishing mana with a potion!",
        }
    }

    /// Apply the power-up, writing its message to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn apply<W: Write>(self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.apply_message())
    }
}

impl fmt::Display for PowerUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerUp::HealthPotion => f.write_str("HealthPotion"),
            PowerUp::ManaPotion => f.write_str("ManaPotion"),
        }
    }
}

/// The weapon and power-up handed out together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemBundle {
    /// The weapon.
    pub weapon: Weapon,
    /// The power-up.
    pub power_up: PowerUp,
}

/// Rule for choosing which items a level hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItemStrategy {
    /// Sword and health potion.
    Advanced,
    /// Shield and mana potion.
    Defensive,
}

impl ItemStrategy {
    /// The strategy used at the given difficulty.
    #[must_use]
    pub const fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => ItemStrategy::Advanced,
            Difficulty::Medium | Difficulty::Hard => ItemStrategy::Defensive,
        }
    }

    /// Create this strategy's weapon.
    #[must_use]
    pub const fn create_weapon(self) -> Weapon {
        match self {
            ItemStrategy::Advanced => Weapon::Sword,
            ItemStrategy::Defensive => Weapon::Shield,
        }
    }

    /// Create this strategy's power-up.
    #[must_use]
    pub const fn create_power_up(self) -> PowerUp {
        match self {
            ItemStrategy::Advanced => PowerUp::HealthPotion,
            ItemStrategy::Defensive => PowerUp::ManaPotion,
        }
    }

    /// Create both items.
    #[must_use]
    pub const fn bundle(self) -> ItemBundle {
        ItemBundle {
            weapon: self.create_weapon(),
            power_up: self.create_power_up(),
        }
    }
}
