//! Per-run session state.

use crate::game::{Difficulty, Level};

/// The level and difficulty chosen for the current run.
///
/// One session is created at the start of a run and passed to whatever needs
/// it. It starts at level 1 on easy and is overwritten once the player picks
/// a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    level: Level,
    difficulty: Difficulty,
}

impl Session {
    /// Create a session with the default level and difficulty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected level.
    #[must_use]
    pub const fn current_level(&self) -> Level {
        self.level
    }

    /// Overwrite the selected level.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// The currently selected difficulty.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Overwrite the selected difficulty.
    ///
    /// Nothing ties this to the level; callers keep them consistent.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_defaults() {
        let session = Session::new();
        assert_eq!(session.current_level().get(), 1);
        assert_eq!(session.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_session_defaults_are_stable() {
        for _ in 0..3 {
            assert_eq!(Session::new(), Session::default());
        }
    }

    #[test]
    fn test_session_setters() {
        let mut session = Session::new();
        session.set_level(Level::new(3).unwrap());
        session.set_difficulty(Difficulty::Hard);
        assert_eq!(session.current_level().get(), 3);
        assert_eq!(session.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_setters_do_not_cross_validate() {
        let mut session = Session::new();
        session.set_difficulty(Difficulty::Medium);
        assert_eq!(session.current_level().get(), 1);
        assert_eq!(session.difficulty(), Difficulty::Medium);
    }
}
