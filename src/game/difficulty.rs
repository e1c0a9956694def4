//! Level numbers and the difficulty they imply.

use std::fmt;

use serde::Serialize;

use crate::error::LevelError;

/// A playable level, guaranteed to lie in `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Level(u8);

impl Level {
    /// Lowest playable level.
    pub const MIN: u8 = 1;
    /// Highest playable level.
    pub const MAX: u8 = 3;

    /// Validate a raw level number.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::OutOfRange`] for anything outside `1..=3`.
    pub fn new(n: i64) -> Result<Self, LevelError> {
        match u8::try_from(n) {
            Ok(v) if (Self::MIN..=Self::MAX).contains(&v) => Ok(Self(v)),
            _ => Err(LevelError::OutOfRange(n)),
        }
    }

    /// The level number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Level {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Game intensity derived from the chosen level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Difficulty {
    /// Level 1.
    #[default]
    Easy,
    /// Level 2.
    Medium,
    /// Level 3.
    Hard,
}

impl Difficulty {
    /// Resolve the difficulty for a level.
    #[must_use]
    pub const fn from_level(level: Level) -> Self {
        match level.get() {
            1 => Difficulty::Easy,
            2 => Difficulty::Medium,
            3 => Difficulty::Hard,
            // Level only ever holds 1 to 3.
            _ => unreachable!(),
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
