//! Best-score record persisted as a single `<name>@<score>` line

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;

use crate::io::configuration::{DEFAULT_PLAYER_NAME, SCORE_DELIMITER};
use crate::io::error::{GameError, Result, WithContext, invalid_score_record};

/// A player name paired with the score they reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    /// Player name, never empty
    pub name: String,
    /// Final score of the game
    pub score: u64,
}

impl ScoreRecord {
    /// Create a record, substituting the default name for a blank one
    pub fn new(name: &str, score: u64) -> Self {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            DEFAULT_PLAYER_NAME
        } else {
            trimmed
        };
        Self {
            name: name.to_string(),
            score,
        }
    }
}

impl fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SCORE_DELIMITER}{}", self.name, self.score)
    }
}

impl FromStr for ScoreRecord {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let line = s.trim();
        // Names may contain the delimiter; the score never does
        let Some((name, score)) = line.rsplit_once(SCORE_DELIMITER) else {
            return Err(invalid_score_record(
                line,
                &format!("missing '{SCORE_DELIMITER}' separator"),
            ));
        };
        let score = score
            .trim()
            .parse::<u64>()
            .map_err(|e| invalid_score_record(line, &e))?;
        Ok(Self::new(name, score))
    }
}

/// File-backed storage for the best score
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored record, or `None` if no file exists yet
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a valid record
    pub fn load(&self) -> Result<Option<ScoreRecord>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => content.parse::<ScoreRecord>().map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(GameError::FileSystem {
                path: self.path.clone(),
                operation: "read",
                source,
            }),
        }
    }

    /// Overwrite the stored record
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save(&self, record: &ScoreRecord) -> Result<()> {
        fs::write(&self.path, record.to_string()).with_path(&self.path, "write")
    }

    /// Whether `score` strictly beats the stored best; a missing record counts as 0
    ///
    /// # Errors
    ///
    /// Returns an error if the stored record cannot be loaded
    pub fn beats(&self, score: u64) -> Result<bool> {
        let best = self.load()?.map_or(0, |record| record.score);
        Ok(score > best)
    }

    /// Save `name` and `score` if the score beats the stored best
    ///
    /// Returns whether the record was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored record cannot be loaded or written
    pub fn record_if_best(&self, name: &str, score: u64) -> Result<bool> {
        if !self.beats(score)? {
            return Ok(false);
        }
        let record = ScoreRecord::new(name, score);
        self.save(&record)?;
        debug!("new best score {record} written to {}", self.path.display());
        Ok(true)
    }
}
