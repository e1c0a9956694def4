//! Game layer for the quest.
//!
//! Everything a level is made of:
//! - Levels and the difficulty they imply
//! - The enemy catalog
//! - The item catalog (weapons, power-ups, hand-out strategies)
//! - Session state for the current run

mod difficulty;
mod enemy;
mod items;
mod session;

pub use difficulty::{Difficulty, Level};
pub use enemy::{Enemy, EnemyKind};
pub use items::{ItemBundle, ItemStrategy, PowerUp, Weapon};
pub use session::Session;
