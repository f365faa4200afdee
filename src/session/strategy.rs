//! Move choosers for unattended play

use clap::ValueEnum;
use rand::seq::IndexedRandom;
use rand::{SeedableRng, rngs::StdRng};

use crate::engine::{Board, Direction};

/// Picks the next direction to play on a board
pub trait Strategy {
    /// Choose a direction for the current board state
    fn choose(&mut self, board: &Board) -> Direction;
}

/// Rotates through the four directions regardless of the board
#[derive(Debug, Clone, Default)]
pub struct Cycle {
    next: usize,
}

impl Strategy for Cycle {
    fn choose(&mut self, _board: &Board) -> Direction {
        let direction = Direction::ALL
            .get(self.next % Direction::ALL.len())
            .copied()
            .unwrap_or(Direction::Up);
        self.next = self.next.wrapping_add(1);
        direction
    }
}

/// Uniformly random directions from a seeded source
#[derive(Debug, Clone)]
pub struct Random {
    rng: StdRng,
}

impl Random {
    /// Create a random chooser with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for Random {
    fn choose(&mut self, _board: &Board) -> Direction {
        Direction::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Direction::Up)
    }
}

/// Plays the direction with the most merges
///
/// Only directions that change the board are considered; ties go to the
/// earliest in [`Direction::ALL`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Strategy for Greedy {
    fn choose(&mut self, board: &Board) -> Direction {
        let mut best: Option<(Direction, u64)> = None;
        for &direction in &Direction::ALL {
            let preview = board.preview(direction);
            if preview.changed && best.is_none_or(|(_, merges)| preview.merges > merges) {
                best = Some((direction, preview.merges));
            }
        }
        best.map_or(Direction::Up, |(direction, _)| direction)
    }
}

/// Strategy selection for the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StrategyKind {
    /// Fixed rotation through the directions
    Cycle,
    /// Seeded random directions
    Random,
    /// Most merges first
    #[default]
    Greedy,
}

impl StrategyKind {
    /// Build the chooser, seeding it where it needs randomness
    pub fn build(self, seed: u64) -> Box<dyn Strategy> {
        match self {
            Self::Cycle => Box::new(Cycle::default()),
            Self::Random => Box::new(Random::new(seed)),
            Self::Greedy => Box::new(Greedy),
        }
    }
}
