//! Persisted High Score
//!
//! One text file holding one decimal integer. A missing file reads as zero;
//! anything unparsable is an error rather than silently losing a score.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors from the high-score store.
#[derive(Debug, Error)]
pub enum HighScoreError {
    /// Could not read or write the score file.
    #[error("could not access high score file: {0}")]
    Io(#[from] io::Error),

    /// The file exists but does not contain a decimal integer.
    #[error("high score file is corrupt: {0:?}")]
    Corrupt(String),
}

/// High-score file on disk.
#[derive(Clone, Debug)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Create a store backed by the given path. Nothing is touched until the
    /// first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted high score. A missing file is a normal
    /// "no prior score" condition and reads as 0.
    pub fn load(&self) -> Result<u32, HighScoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no high score file, defaulting to 0");
                return Ok(0);
            }
            Err(err) => return Err(err.into()),
        };

        contents
            .trim()
            .parse::<u32>()
            .map_err(|_| HighScoreError::Corrupt(contents.trim().to_string()))
    }

    /// Overwrite the persisted high score.
    pub fn save(&self, score: u32) -> Result<(), HighScoreError> {
        fs::write(&self.path, format!("{score}\n"))?;
        Ok(())
    }

    /// Persist `score` if it beats the stored one. Returns whether it did.
    pub fn submit(&self, score: u32) -> Result<bool, HighScoreError> {
        let current = self.load()?;
        if score > current {
            self.save(score)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static UNIQUE: AtomicU32 = AtomicU32::new(0);

    /// A fresh path under the system temp dir, unique per test.
    fn scratch_store() -> HighScoreStore {
        let n = UNIQUE.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "palm-racer-test-{}-{}.txt",
            std::process::id(),
            n
        ));
        let _ = fs::remove_file(&path);
        HighScoreStore::new(path)
    }

    #[test]
    fn test_missing_file_reads_as_zero() {
        let store = scratch_store();
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn test_round_trip() {
        let store = scratch_store();
        store.save(417).unwrap();
        assert_eq!(store.load().unwrap(), 417);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_submit_only_beats() {
        let store = scratch_store();
        store.save(100).unwrap();

        assert!(!store.submit(99).unwrap());
        assert_eq!(store.load().unwrap(), 100);

        assert!(!store.submit(100).unwrap());
        assert_eq!(store.load().unwrap(), 100);

        assert!(store.submit(101).unwrap());
        assert_eq!(store.load().unwrap(), 101);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_submit_creates_file_when_missing() {
        let store = scratch_store();
        assert!(store.submit(5).unwrap());
        assert_eq!(store.load().unwrap(), 5);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let store = scratch_store();
        fs::write(store.path(), "not a number").unwrap();
        assert!(matches!(store.load(), Err(HighScoreError::Corrupt(_))));
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_trailing_whitespace_tolerated() {
        let store = scratch_store();
        fs::write(store.path(), "42\n").unwrap();
        assert_eq!(store.load().unwrap(), 42);
        let _ = fs::remove_file(store.path());
    }
}
