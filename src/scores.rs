//! High-score persistence.
//!
//! The engine reports its bankroll to a [`ScoreBook`] after every settlement
//! and asks it for the best recorded score when a session starts. Where and how
//! scores are stored is up to the implementation.

extern crate alloc;

use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt;

/// Storage for bankroll high scores.
pub trait ScoreBook {
    /// Error raised by the backing store.
    type Error: fmt::Display;

    /// Loads previously recorded scores, replacing anything held in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load(&mut self) -> Result<(), Self::Error>;

    /// Records a bankroll value as a score.
    ///
    /// # Errors
    ///
    /// Returns an error if the score cannot be persisted. The score is still
    /// kept in memory.
    fn record(&mut self, bankroll: i64) -> Result<(), Self::Error>;

    /// Returns the highest recorded score, if any.
    fn highest(&self) -> Option<i64>;
}

/// A score book that keeps scores in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryScoreBook {
    scores: Vec<i64>,
}

impl MemoryScoreBook {
    /// Creates an empty score book.
    #[must_use]
    pub const fn new() -> Self {
        Self { scores: Vec::new() }
    }

    /// Returns the recorded scores in recording order.
    #[must_use]
    pub fn scores(&self) -> &[i64] {
        &self.scores
    }
}

impl ScoreBook for MemoryScoreBook {
    type Error = Infallible;

    fn load(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn record(&mut self, bankroll: i64) -> Result<(), Self::Error> {
        self.scores.push(bankroll);
        Ok(())
    }

    fn highest(&self) -> Option<i64> {
        self.scores.iter().copied().max()
    }
}

#[cfg(feature = "std")]
pub use file::{FileScoreBook, ScoreEntry};

#[cfg(feature = "std")]
mod file {
    use std::fs::{self, OpenOptions};
    use std::io::{self, Write};
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::ScoreBook;
    use crate::error::ScoreError;

    const DELIMITER: char = '|';

    /// A recorded score.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ScoreEntry {
        /// Bankroll at the time of recording.
        pub score: i64,
        /// Seconds since the Unix epoch.
        pub recorded_at: u64,
    }

    impl ScoreEntry {
        fn parse(line: &str) -> Option<Self> {
            let (score, recorded_at) = line.split_once(DELIMITER)?;
            Some(Self {
                score: score.trim().parse().ok()?,
                recorded_at: recorded_at.trim().parse().ok()?,
            })
        }
    }

    /// A score book backed by a text file with one `score|unix_seconds` line
    /// per record. Each record is appended as soon as it is made.
    #[derive(Debug, Clone)]
    pub struct FileScoreBook {
        path: PathBuf,
        entries: Vec<ScoreEntry>,
    }

    impl FileScoreBook {
        /// Creates a score book for the given file. Nothing is read until
        /// [`ScoreBook::load`] is called.
        #[must_use]
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self {
                path: path.into(),
                entries: Vec::new(),
            }
        }

        /// Returns the backing file path.
        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }

        /// Returns the loaded and recorded entries, best score first.
        #[must_use]
        pub fn entries(&self) -> &[ScoreEntry] {
            &self.entries
        }
    }

    impl ScoreBook for FileScoreBook {
        type Error = ScoreError;

        fn load(&mut self) -> Result<(), Self::Error> {
            self.entries.clear();

            let contents = match fs::read_to_string(&self.path) {
                Ok(contents) => contents,
                Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
                Err(err) => return Err(err.into()),
            };

            let mut entries = Vec::new();
            for (index, line) in contents.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                let entry =
                    ScoreEntry::parse(line).ok_or(ScoreError::Malformed { line: index + 1 })?;
                entries.push(entry);
            }

            entries.sort_by(|a, b| b.score.cmp(&a.score));
            self.entries = entries;
            Ok(())
        }

        fn record(&mut self, bankroll: i64) -> Result<(), Self::Error> {
            let recorded_at = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |elapsed| elapsed.as_secs());
            let entry = ScoreEntry {
                score: bankroll,
                recorded_at,
            };

            let position = self
                .entries
                .partition_point(|existing| existing.score >= entry.score);
            self.entries.insert(position, entry);

            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            writeln!(file, "{}{DELIMITER}{}", entry.score, entry.recorded_at)?;
            Ok(())
        }

        fn highest(&self) -> Option<i64> {
            self.entries.first().map(|entry| entry.score)
        }
    }
}
