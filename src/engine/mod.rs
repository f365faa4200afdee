//! Board engine for the sliding-tile merge puzzle
//!
//! This module contains the game rules:
//! - Tile values and their merge rule
//! - Line collapse and whole-grid shifts
//! - Board state with spawning, scoring and move detection

/// Board state, spawning and terminal-state detection
pub mod board;
/// Shift directions
pub mod direction;
/// Square cell grids and pure shift transformations
pub mod grid;
/// Per-line compaction and merging
pub mod line;
/// Power-of-two tile values
pub mod tile;

pub use board::Board;
pub use direction::Direction;
pub use tile::Tile;
