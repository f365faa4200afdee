//! Power-of-two tile values and their merge rule

use std::fmt;

use crate::io::configuration::SPAWN_MAGNITUDE;
use crate::io::error::{GameError, Result};

/// A board cell value holding a power-of-two magnitude
///
/// Tiles are plain values: equality and ordering follow the magnitude, and a
/// merge produces a new tile rather than mutating either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile {
    magnitude: u64,
}

impl Default for Tile {
    fn default() -> Self {
        Self::new(SPAWN_MAGNITUDE)
    }
}

impl Tile {
    /// Create a tile with the given magnitude
    ///
    /// The magnitude is expected to be a power of two; this is not checked.
    pub const fn new(magnitude: u64) -> Self {
        Self { magnitude }
    }

    /// Displayed value of the tile
    pub const fn magnitude(self) -> u64 {
        self.magnitude
    }

    /// Whether `other` is present and holds the same magnitude
    pub fn equals(self, other: Option<Self>) -> bool {
        other.is_some_and(|tile| tile == self)
    }

    /// Tile of twice this magnitude, or `None` if it would overflow
    pub const fn doubled(self) -> Option<Self> {
        match self.magnitude.checked_mul(2) {
            Some(magnitude) => Some(Self::new(magnitude)),
            None => None,
        }
    }

    /// Merge `other` into this tile
    ///
    /// An absent `other` leaves the tile unchanged; an equal one doubles it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMerge`] when `other` is present with a
    /// different magnitude, or when doubling would overflow
    pub fn combine(self, other: Option<Self>) -> Result<Self> {
        match other {
            None => Ok(self),
            Some(tile) => self
                .doubled()
                .filter(|_| tile == self)
                .ok_or(GameError::InvalidMerge {
                    left: self.magnitude,
                    right: tile.magnitude,
                }),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.magnitude)
    }
}
