//! Command-line interface for playing batches of unattended games

use crate::engine::Board;
use crate::io::configuration::{
    DEFAULT_DIMENSION, DEFAULT_GAMES, DEFAULT_MAX_MOVES, DEFAULT_PLAYER_NAME, DEFAULT_SEED,
    SCORE_FILE,
};
use crate::io::error::{GameError, Result};
use crate::io::progress::ProgressManager;
use crate::io::score::{ScoreRecord, ScoreStore};
use crate::session::strategy::{Strategy, StrategyKind};
use crate::session::{Game, GameConfig, SpawnPolicy};
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "tilemerge")]
#[command(
    author,
    version,
    about = "Play sliding-tile merge puzzles with an automatic strategy"
)]
/// Command-line arguments for the game runner
pub struct Cli {
    /// Board side length
    #[arg(short, long, default_value_t = DEFAULT_DIMENSION)]
    pub dimension: usize,

    /// Random seed for reproducible games
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of games to play
    #[arg(short, long, default_value_t = DEFAULT_GAMES)]
    pub games: usize,

    /// How the next direction is chosen
    #[arg(short = 'S', long, value_enum, default_value_t = StrategyKind::default())]
    pub strategy: StrategyKind,

    /// Give up on a game after this many moves
    #[arg(short, long, default_value_t = DEFAULT_MAX_MOVES)]
    pub max_moves: usize,

    /// Only spawn a tile after a move that changed the board
    #[arg(long)]
    pub spawn_on_change: bool,

    /// Player name stored with a new best score
    #[arg(short, long, default_value = DEFAULT_PLAYER_NAME)]
    pub name: String,

    /// File holding the best-score record
    #[arg(long, value_name = "PATH", default_value = SCORE_FILE)]
    pub score_file: PathBuf,

    /// Do not update the best-score record
    #[arg(long)]
    pub no_save: bool,

    /// Suppress progress and board output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Session parameters derived from the arguments
    pub const fn game_config(&self) -> GameConfig {
        GameConfig {
            dimension: self.dimension,
            seed: self.seed,
            spawn_policy: if self.spawn_on_change {
                SpawnPolicy::OnChange
            } else {
                SpawnPolicy::Always
            },
        }
    }

    /// Check if the best-score record should be updated
    pub const fn should_save(&self) -> bool {
        !self.no_save
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Result of one unattended game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    /// Position of the game in the batch
    pub index: usize,
    /// Final score
    pub score: u64,
    /// Moves played
    pub moves: usize,
    /// Largest tile reached
    pub max_tile: u64,
    /// Whether the game reached the terminal state rather than the move limit
    pub finished: bool,
}

/// Result of a whole batch
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Every game in play order
    pub games: Vec<GameSummary>,
    /// Board of the last game played
    pub last_board: Option<Board>,
    /// Whether a new best-score record was written
    pub new_record: bool,
}

impl RunSummary {
    /// Highest-scoring game, earliest on ties
    pub fn best(&self) -> Option<&GameSummary> {
        self.games
            .iter()
            .fold(None, |best: Option<&GameSummary>, game| match best {
                Some(b) if b.score >= game.score => Some(b),
                _ => Some(game),
            })
    }
}

/// Plays the requested games and records the best score
pub struct GameRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl GameRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Play every game and update the score record
    ///
    /// # Errors
    ///
    /// Returns an error if the board dimension is invalid or the score
    /// record cannot be written
    pub fn run(&mut self) -> Result<RunSummary> {
        let mut summary = RunSummary {
            games: Vec::with_capacity(self.cli.games),
            last_board: None,
            new_record: false,
        };

        if self.cli.games == 0 {
            return Ok(summary);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.games);
        }

        let mut game = Game::new(self.cli.game_config())?;
        let mut strategy = self.cli.strategy.build(self.cli.seed);

        for index in 0..self.cli.games {
            if index > 0 {
                game.new_game()?;
            }

            let start_time = Instant::now();
            let result = self.play_game(&mut game, strategy.as_mut(), index);
            info!(
                "game {} finished: score {} in {} moves, max tile {}{}",
                index + 1,
                result.score,
                result.moves,
                result.max_tile,
                if result.finished {
                    ""
                } else {
                    " (move limit reached)"
                }
            );

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_game(result.score, start_time.elapsed());
            }
            summary.games.push(result);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        summary.last_board = Some(game.board().clone());

        if self.cli.should_save() {
            if let Some(best) = summary.best().map(|best| best.score) {
                summary.new_record = self.record_best(best)?;
            }
        }

        if !self.cli.quiet {
            Self::print_summary(&summary);
        }

        Ok(summary)
    }

    fn play_game(
        &self,
        game: &mut Game,
        strategy: &mut dyn Strategy,
        index: usize,
    ) -> GameSummary {
        while !game.is_over() && game.moves() < self.cli.max_moves {
            let direction = strategy.choose(game.board());
            game.play(direction);

            if let Some(ref pm) = self.progress_manager {
                pm.update_game(index, game.moves(), game.score());
            }
        }

        GameSummary {
            index,
            score: game.score(),
            moves: game.moves(),
            max_tile: game.board().max_tile().map_or(0, |tile| tile.magnitude()),
            finished: game.is_over(),
        }
    }

    fn record_best(&self, score: u64) -> Result<bool> {
        let store = ScoreStore::new(&self.cli.score_file);
        match store.record_if_best(&self.cli.name, score) {
            Err(GameError::InvalidScoreRecord { line, reason }) => {
                warn!("replacing unreadable score record '{line}': {reason}");
                store.save(&ScoreRecord::new(&self.cli.name, score))?;
                Ok(true)
            }
            Ok(true) => {
                info!("new best score {score} saved to {}", store.path().display());
                Ok(true)
            }
            other => other,
        }
    }

    // Allow print for the final board and results
    #[allow(clippy::print_stdout)]
    fn print_summary(summary: &RunSummary) {
        if let Some(ref board) = summary.last_board {
            println!("{board}");
        }
        if let Some(best) = summary.best() {
            println!(
                "Best of {} game(s): score {} in {} moves, max tile {}",
                summary.games.len(),
                best.score,
                best.moves,
                best.max_tile
            );
        }
        if summary.new_record {
            println!("New best score recorded");
        }
    }
}
