//! Board engine for the sliding-tile merge puzzle of the "2048" family
//!
//! Tiles slide across a square grid in one of four directions, equal
//! neighbours merge into a tile of doubled magnitude, and a new tile appears
//! on a random empty cell after every move. The game ends once no shift can
//! change the grid.

#![forbid(unsafe_code)]

/// Tile values, line collapse, grid shifts and board state
pub mod engine;
/// Command line, configuration, error handling and best-score persistence
pub mod io;
/// Game sessions and automated move selection
pub mod session;

pub use io::error::{GameError, Result};
