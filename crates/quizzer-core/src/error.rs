//! Library error types.
//!
//! Invalid answers and malformed leaderboard lines are recovered where they
//! occur and never reach this type. What is left here ends the program.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a quiz session.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The leaderboard file exists but could not be read.
    #[error("failed to read leaderboard {}: {source}", path.display())]
    LeaderboardRead { path: PathBuf, source: io::Error },

    /// The leaderboard file could not be written.
    #[error("failed to write leaderboard {}: {source}", path.display())]
    LeaderboardWrite { path: PathBuf, source: io::Error },

    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),

    /// Standard input reached end-of-stream while a prompt was waiting.
    #[error("input closed while waiting for an answer")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, QuizError>;
