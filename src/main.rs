//! Creational Quest CLI - pick a level and play it through.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::Parser;
use std::process::ExitCode;

/// Creational Quest - a one-level text adventure
#[derive(Parser, Debug)]
#[command(name = "creational-quest")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Level to play (1-3). Prompts on stdin when omitted.
    #[arg(short, long, allow_negative_numbers = true)]
    level: Option<i32>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: cli::OutputFormat,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    match cli::play::execute(args.level, args.format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}
