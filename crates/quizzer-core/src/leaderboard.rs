//! Flat-file top-5 leaderboard.
//!
//! The file holds one `name,score` record per line. It is read in full and
//! rewritten in full on every update; there is no locking, so two processes
//! sharing a path race and the last writer wins.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};

/// Maximum number of entries kept after a save.
pub const CAPACITY: usize = 5;

/// Default location, relative to the working directory.
pub const DEFAULT_PATH: &str = "leaderboard.txt";

/// A single (name, score) record. Names are not unique.
///
/// Rounds only ever record non-negative scores, but any integer already in
/// the file is kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: i64,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// Parse a `name,score` record. Returns `None` for anything malformed.
    fn parse(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.trim().split(',').collect();
        let [name, score] = parts.as_slice() else {
            return None;
        };
        let score = score.trim().parse::<i64>().ok()?;
        Some(Self::new(*name, score))
    }
}

/// A leaderboard backed by a file on disk.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    path: PathBuf,
}

impl Leaderboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every well-formed record from the file.
    ///
    /// A missing file is an empty board. Malformed lines are skipped.
    pub fn load(&self) -> Result<Vec<LeaderboardEntry>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(QuizError::LeaderboardRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let entries: Vec<LeaderboardEntry> =
            content.lines().filter_map(LeaderboardEntry::parse).collect();
        tracing::debug!(
            "loaded {} leaderboard entries from {}",
            entries.len(),
            self.path.display()
        );
        Ok(entries)
    }

    /// Rank `entries`, keep the top [`CAPACITY`], and overwrite the file.
    ///
    /// Returns the entries actually written. Equal scores keep their input
    /// order.
    pub fn save(&self, mut entries: Vec<LeaderboardEntry>) -> Result<Vec<LeaderboardEntry>> {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(CAPACITY);

        let content: String = entries
            .iter()
            .map(|entry| format!("{},{}\n", entry.name, entry.score))
            .collect();

        let write_err = |source| QuizError::LeaderboardWrite {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(&self.path, content).map_err(write_err)?;

        tracing::debug!(
            "saved {} leaderboard entries to {}",
            entries.len(),
            self.path.display()
        );
        Ok(entries)
    }

    /// Record a new score and return the resulting top entries.
    pub fn update(&self, name: &str, score: u32) -> Result<Vec<LeaderboardEntry>> {
        let mut entries = self.load()?;
        entries.push(LeaderboardEntry::new(name, i64::from(score)));
        self.save(entries)
    }
}
