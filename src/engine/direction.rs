//! Shift directions and how each maps onto line collapses

use std::fmt;

/// A direction in which every tile on the board slides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Slide towards row 0
    Up,
    /// Slide towards the last row
    Down,
    /// Slide towards column 0
    Left,
    /// Slide towards the last column
    Right,
}

impl Direction {
    /// All four directions, in the order move detection tries them
    pub const ALL: [Self; 4] = [Self::Up, Self::Left, Self::Right, Self::Down];

    /// Whether lines run along columns, requiring a transpose around the collapse
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Whether each line must be reversed so its head faces the shift direction
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::Down | Self::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}
