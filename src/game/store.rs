//! Local key-value persistence for the two records
//!
//! `currentGame` holds the active session (absent when none) and `gameStats`
//! holds the counters. Both are JSON.

use super::session::GameSession;
use super::stats::Stats;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const GAME_FILE: &str = "current_game.json";
const STATS_FILE: &str = "game_stats.json";

/// Error raised by a store; the session manager logs and ignores these
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Format(serde_json::Error),
    Unavailable,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(f, "storage I/O failed: {error}"),
            Self::Format(error) => write!(f, "stored data is malformed: {error}"),
            Self::Unavailable => write!(f, "storage is unavailable"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        Self::Format(error)
    }
}

/// Synchronous storage for the current game and the stats
pub trait GameStore {
    /// # Errors
    /// Returns `StoreError` if the record exists but cannot be read.
    fn load_game(&self) -> Result<Option<GameSession>, StoreError>;

    /// Write the game, or remove the record when `game` is `None`
    ///
    /// # Errors
    /// Returns `StoreError` if the write fails.
    fn save_game(&mut self, game: Option<&GameSession>) -> Result<(), StoreError>;

    /// All-zero stats when nothing has been saved yet
    ///
    /// # Errors
    /// Returns `StoreError` if the record exists but cannot be read.
    fn load_stats(&self) -> Result<Stats, StoreError>;

    /// # Errors
    /// Returns `StoreError` if the write fails.
    fn save_stats(&mut self, stats: &Stats) -> Result<(), StoreError>;
}

/// One JSON file per record inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read(&self, name: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.dir.join(name)) {
            Ok(content) => Ok(Some(content)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn write(&self, name: &str, content: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(name), content)?;
        Ok(())
    }
}

impl GameStore for FileStore {
    fn load_game(&self) -> Result<Option<GameSession>, StoreError> {
        self.read(GAME_FILE)?
            .map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(Into::into)
    }

    fn save_game(&mut self, game: Option<&GameSession>) -> Result<(), StoreError> {
        match game {
            Some(game) => self.write(GAME_FILE, &serde_json::to_string_pretty(game)?),
            None => match fs::remove_file(self.dir.join(GAME_FILE)) {
                Err(error) if error.kind() != io::ErrorKind::NotFound => Err(error.into()),
                _ => Ok(()),
            },
        }
    }

    fn load_stats(&self) -> Result<Stats, StoreError> {
        Ok(match self.read(STATS_FILE)? {
            Some(json) => serde_json::from_str(&json)?,
            None => Stats::default(),
        })
    }

    fn save_stats(&mut self, stats: &Stats) -> Result<(), StoreError> {
        self.write(STATS_FILE, &serde_json::to_string_pretty(stats)?)
    }
}

/// In-process store holding the serialized records
///
/// `failing()` builds one whose writes always fail, to exercise the
/// swallow-and-continue path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    game: Option<String>,
    stats: Option<String>,
    fail_writes: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }
}

impl GameStore for MemoryStore {
    fn load_game(&self) -> Result<Option<GameSession>, StoreError> {
        self.game
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(Into::into)
    }

    fn save_game(&mut self, game: Option<&GameSession>) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Unavailable);
        }
        self.game = game.map(serde_json::to_string).transpose()?;
        Ok(())
    }

    fn load_stats(&self) -> Result<Stats, StoreError> {
        Ok(match &self.stats {
            Some(json) => serde_json::from_str(json)?,
            None => Stats::default(),
        })
    }

    fn save_stats(&mut self, stats: &Stats) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Unavailable);
        }
        self.stats = Some(serde_json::to_string(stats)?);
        Ok(())
    }
}
