//! Game sessions and unattended play

/// Game controller implementing the move/spawn/check cycle
pub mod game;
/// Direction choosers for automated play
pub mod strategy;

pub use game::{Game, GameConfig, MoveOutcome, SpawnPolicy};
