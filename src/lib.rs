// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Creational Quest: a one-level text game built from closed catalogs.
//!
//! A run picks a level, derives its difficulty, spawns one enemy and hands
//! out one weapon and one power-up.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        Orchestrator (one run)       │
//! ├─────────────────────────────────────┤
//! │   Session · Enemy / Item catalogs   │
//! ├─────────────────────────────────────┤
//! │     Level → Difficulty resolver     │
//! └─────────────────────────────────────┘
//! ```

pub mod error;
pub mod game;
pub mod orchestrator;

pub use error::{GameError, LevelError, RunError, RunResult};

// Re-export key game types at crate root for convenience
pub use game::{
    Difficulty, Enemy, EnemyKind, ItemBundle, ItemStrategy, Level, PowerUp, Session, Weapon,
};
pub use orchestrator::{run, Outcome, ReportFormat, RunConfig, RunReport};
