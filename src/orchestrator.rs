//! Drives a single run: read a level, set up the session, play it out.
//!
//! The run is a straight pipeline with no loops:
//!
//! ```text
//! level input -> Session -> Difficulty -> Enemy -> ItemBundle -> report
//! ```
//!
//! Input and output are generic so the binary can hand in stdin/stdout and
//! tests can hand in byte buffers.

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{RunError, RunResult};
use crate::game::{Difficulty, Enemy, EnemyKind, ItemStrategy, Level, PowerUp, Session, Weapon};

/// Prompt written before reading the level. No trailing newline.
pub const PROMPT: &str = "Enter the level you want to play (1-3): ";

/// Message written when the chosen level is not playable.
pub const INVALID_LEVEL_MESSAGE: &str =
    "Invalid level! Please restart and choose a level between 1 and 3.";

/// Message written after the level summary.
pub const CONGRATULATIONS_MESSAGE: &str =
    "=== Congratulations! You completed the chosen level! ===";

/// How the result of a run is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// The narrated game text.
    #[default]
    Text,
    /// A single pretty-printed JSON [`RunReport`].
    Json,
}

/// Options for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunConfig {
    /// Level chosen up front. When `None` the player is prompted.
    pub level: Option<i64>,
    /// Output format.
    pub format: ReportFormat,
}

/// Everything that happened in a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Level played.
    pub level: Level,
    /// Difficulty derived from the level.
    pub difficulty: Difficulty,
    /// Enemy that appeared.
    pub enemy: EnemyKind,
    /// Strategy that chose the items.
    pub strategy: ItemStrategy,
    /// Weapon handed out.
    pub weapon: Weapon,
    /// Power-up handed out.
    pub power_up: PowerUp,
}

impl RunReport {
    /// Resolve the encounter for the level and difficulty held by `session`.
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let difficulty = session.difficulty();
        let strategy = ItemStrategy::for_difficulty(difficulty);
        let items = strategy.bundle();

        Self {
            level: session.current_level(),
            difficulty,
            enemy: EnemyKind::for_difficulty(difficulty),
            strategy,
            weapon: items.weapon,
            power_up: items.power_up,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The level was played to the end.
    Completed(RunReport),
    /// The entered number is not a playable level. Nothing was played.
    InvalidLevel(i64),
}

/// Read the next integer token from `input`.
///
/// Blank lines are skipped. Only the first token of the first non-blank line
/// is considered. The token must fit in an `i32`; larger numbers are not
/// levels at all, so they are invalid input rather than an invalid level.
///
/// # Errors
///
/// Returns [`RunError::MissingInput`] if the input ends first,
/// [`RunError::InvalidInput`] if the token is not a 32-bit integer, or
/// [`RunError::Io`] if reading fails.
pub fn read_level<R: BufRead>(input: &mut R) -> RunResult<i64> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(RunError::MissingInput);
        }
        if let Some(token) = line.split_whitespace().next() {
            return token
                .parse::<i32>()
                .map(i64::from)
                .map_err(|_| RunError::InvalidInput(token.to_string()));
        }
    }
}

/// Play one run.
///
/// An out-of-range level is reported to `out` and returned as
/// [`Outcome::InvalidLevel`]; the session is never touched in that case.
///
/// # Errors
///
/// Returns an error if the level cannot be read, or if writing to `out` fails.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &RunConfig,
) -> RunResult<Outcome> {
    let mut session = Session::new();

    let raw = match config.level {
        Some(n) => n,
        None => {
            if config.format == ReportFormat::Text {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }
            read_level(input)?
        }
    };

    let level = match Level::new(raw) {
        Ok(level) => level,
        Err(e) => {
            warn!(error = %e, "rejected level choice");
            writeln!(out, "{INVALID_LEVEL_MESSAGE}")?;
            return Ok(Outcome::InvalidLevel(raw));
        }
    };

    session.set_level(level);
    session.set_difficulty(Difficulty::from_level(level));
    debug!(
        level = %session.current_level(),
        difficulty = %session.difficulty(),
        "session configured"
    );

    let report = RunReport::from_session(&session);
    match config.format {
        ReportFormat::Text => narrate(&report, out)?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    info!(level = %report.level, enemy = %report.enemy, "level complete");
    Ok(Outcome::Completed(report))
}

/// Write the game text for a resolved run.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn narrate<W: Write>(report: &RunReport, out: &mut W) -> std::io::Result<()> {
    let level = report.level;
    writeln!(out, "=== Level {level} ===")?;
    writeln!(out, "Current Level: {level}")?;
    writeln!(out, "Difficulty: {}", report.difficulty)?;

    let enemy = Enemy::spawn(report.enemy);
    debug!(enemy = %enemy.kind(), "enemy spawned");
    writeln!(out, ">> A wild {} appears!", enemy.kind())?;
    writeln!(out, "{}", enemy.describe())?;
    enemy.attack(out)?;

    debug!(strategy = ?report.strategy, "items handed out");
    writeln!(out, ">> Found a weapon!")?;
    report.weapon.use_on(out)?;
    writeln!(out, ">> Found a power-up!")?;
    report.power_up.apply(out)?;

    writeln!(out, ">> Level {level} Complete!")?;
    writeln!(out)?;
    writeln!(out, "{CONGRATULATIONS_MESSAGE}")
}
