//! Game controller driving a board through the move/spawn/check cycle
//!
//! Mirrors what a presentation layer does with the engine: seed a fresh board
//! with opening tiles, then for every directional input shift, spawn, and test
//! for the terminal state.

use log::debug;
use rand::{SeedableRng, rngs::StdRng};

use crate::engine::{Board, Direction};
use crate::io::configuration::{DEFAULT_DIMENSION, DEFAULT_SEED, INITIAL_TILES};
use crate::io::error::Result;

/// When a new tile appears after a directional input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpawnPolicy {
    /// After every input, even one that moved nothing
    #[default]
    Always,
    /// Only after an input that changed the grid
    OnChange,
}

/// Parameters for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board side length
    pub dimension: usize,
    /// Seed for tile placement
    pub seed: u64,
    /// Spawn behaviour after each input
    pub spawn_policy: SpawnPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            seed: DEFAULT_SEED,
            spawn_policy: SpawnPolicy::default(),
        }
    }
}

/// What a single directional input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the shift changed the grid
    pub changed: bool,
    /// Merge events performed by the shift
    pub merges: u64,
    /// Where a tile was spawned, if one was
    pub spawned: Option<(usize, usize)>,
    /// Whether no further shift can change the grid
    pub game_over: bool,
}

/// A single-player session over one board
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    rng: StdRng,
    config: GameConfig,
    moves: usize,
    over: bool,
}

impl Game {
    /// Start a game on a fresh board seeded with the opening tiles
    ///
    /// # Errors
    ///
    /// Returns an error if the configured dimension is invalid
    pub fn new(config: GameConfig) -> Result<Self> {
        let board = Board::new(config.dimension)?;
        let mut game = Self::from_board(board, config);
        game.seed_opening();
        Ok(game)
    }

    /// Continue a game from an existing board without adding tiles
    pub fn from_board(board: Board, config: GameConfig) -> Self {
        let over = !board.has_moves();
        Self {
            board,
            rng: StdRng::seed_from_u64(config.seed),
            config,
            moves: 0,
            over,
        }
    }

    /// Replace the board with a fresh one and place the opening tiles
    ///
    /// The random source carries on from the previous game.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured dimension is invalid
    pub fn new_game(&mut self) -> Result<()> {
        self.board = Board::new(self.config.dimension)?;
        self.moves = 0;
        self.seed_opening();
        Ok(())
    }

    /// Apply one directional input
    ///
    /// Once the game is over the board is left untouched.
    pub fn play(&mut self, direction: Direction) -> MoveOutcome {
        if self.over {
            return MoveOutcome {
                changed: false,
                merges: 0,
                spawned: None,
                game_over: true,
            };
        }

        let score_before = self.board.score();
        let changed = self.board.shift(direction);
        let merges = self.board.score() - score_before;

        let spawned = match self.config.spawn_policy {
            SpawnPolicy::Always => self.board.spawn_tile(&mut self.rng),
            SpawnPolicy::OnChange if changed => self.board.spawn_tile(&mut self.rng),
            SpawnPolicy::OnChange => None,
        };

        self.moves += 1;
        self.over = !self.board.has_moves();
        if self.over {
            debug!(
                "game over after {} moves with score {}",
                self.moves,
                self.board.score()
            );
        }

        MoveOutcome {
            changed,
            merges,
            spawned,
            game_over: self.over,
        }
    }

    /// Current board
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Score of the current board
    pub const fn score(&self) -> u64 {
        self.board.score()
    }

    /// Inputs applied since the board was created
    pub const fn moves(&self) -> usize {
        self.moves
    }

    /// Whether the board has reached the terminal state
    pub const fn is_over(&self) -> bool {
        self.over
    }

    /// Session parameters
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    fn seed_opening(&mut self) {
        for _ in 0..INITIAL_TILES {
            self.board.spawn_tile(&mut self.rng);
        }
        self.over = !self.board.has_moves();
    }
}
