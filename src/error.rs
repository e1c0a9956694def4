//! Error types for the quest library.

use std::fmt;
use std::io;

/// Errors raised by the game catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// An enemy label that does not name any known enemy.
    UnrecognizedEnemyKind(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::UnrecognizedEnemyKind(label) => {
                write!(f, "unknown enemy type: {label:?}")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// A level number that cannot be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    /// The number lies outside the playable range.
    OutOfRange(i64),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::OutOfRange(n) => write!(f, "level {n} is outside 1-3"),
        }
    }
}

impl std::error::Error for LevelError {}

/// Errors that abort a run before it completes.
///
/// An out-of-range level is not one of these: it is reported to the player
/// and the run ends normally.
#[derive(Debug)]
pub enum RunError {
    /// The input stream ended before a level was entered.
    MissingInput,
    /// The entered token is not an integer.
    InvalidInput(String),
    /// Reading the input or writing the output failed.
    Io(io::Error),
    /// The run report could not be serialized.
    Report(serde_json::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::MissingInput => write!(f, "no level was entered"),
            RunError::InvalidInput(token) => write!(f, "expected a level number, got {token:?}"),
            RunError::Io(e) => write!(f, "I/O error: {e}"),
            RunError::Report(e) => write!(f, "failed to serialize run report: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Io(e) => Some(e),
            RunError::Report(e) => Some(e),
            RunError::MissingInput | RunError::InvalidInput(_) => None,
        }
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        RunError::Io(e)
    }
}

impl From<serde_json::Error> for RunError {
    fn from(e: serde_json::Error) -> Self {
        RunError::Report(e)
    }
}

/// Result type for a single run.
pub type RunResult<T> = Result<T, RunError>;
