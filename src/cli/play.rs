//! Play command implementation.

use super::{CliError, OutputFormat};
use creational_quest::{run, Outcome, RunConfig};
use std::io::{self, BufRead, Write};

/// Execute a run against stdin/stdout.
///
/// An out-of-range level still counts as success: the game has already told
/// the player what went wrong.
///
/// # Errors
///
/// Returns an error if no level could be read or the output cannot be written.
pub(crate) fn execute(level: Option<i32>, format: OutputFormat) -> Result<(), CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(&mut stdin.lock(), &mut stdout.lock(), level, format)
}

fn play<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    level: Option<i32>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let config = RunConfig {
        level: level.map(i64::from),
        format: format.into(),
    };
    let prompted = level.is_none() && format == OutputFormat::Text;

    let outcome = match run(input, out, &config) {
        Ok(outcome) => outcome,
        Err(e) => {
            // Finish the prompt line before the error goes to stderr.
            if prompted {
                writeln!(out)?;
            }
            return Err(e.into());
        }
    };

    if let Outcome::InvalidLevel(n) = outcome {
        tracing::debug!(level = n, "run ended without playing");
    }

    Ok(())
}
