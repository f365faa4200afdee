//! Progress display for batches of unattended games

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Games: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many games of a batch have finished
///
/// The bar message shows the game in flight and the best score so far.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    game_count: usize,
    best_score: u64,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            game_count: 0,
            best_score: 0,
        }
    }

    /// Create the bar for a batch of `game_count` games
    pub fn initialize(&mut self, game_count: usize) {
        self.game_count = game_count;
        self.best_score = 0;
        let bar = ProgressBar::new(game_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Report moves played and current score of the game in flight
    pub fn update_game(&self, index: usize, moves: usize, score: u64) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!(
                "game {}/{} move {moves} score {score} (best {})",
                index + 1,
                self.game_count,
                self.best_score
            ));
        }
    }

    /// Mark a game as finished
    pub fn complete_game(&mut self, score: u64, _elapsed: Duration) {
        self.best_score = self.best_score.max(score);
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Best score among completed games
    pub const fn best_score(&self) -> u64 {
        self.best_score
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
