//! Game constants and runtime configuration defaults

// Board shape
/// Side length of a standard board
pub const DEFAULT_DIMENSION: usize = 4;
// Keeps the N² simulations in move detection cheap
/// Maximum allowed board dimension
pub const MAX_DIMENSION: usize = 64;

// Tile spawning
/// Magnitude of every freshly spawned tile
pub const SPAWN_MAGNITUDE: u64 = 2;
/// Number of tiles placed on a new board
pub const INITIAL_TILES: usize = 2;

// Default values for configurable parameters
/// Fixed seed for reproducible games
pub const DEFAULT_SEED: u64 = 42;
/// Number of games played by the runner
pub const DEFAULT_GAMES: usize = 1;
/// Move limit per game before the runner gives up on it
pub const DEFAULT_MAX_MOVES: usize = 100_000;

// Best-score persistence
/// File holding the best-score record
pub const SCORE_FILE: &str = "data";
/// Separator between player name and score in the record
pub const SCORE_DELIMITER: char = '@';
/// Name recorded when the player gives none
pub const DEFAULT_PLAYER_NAME: &str = "Noname";
