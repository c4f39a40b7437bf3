//! quizzer-core — Question bank, leaderboard store, and round engine.
//!
//! This crate holds everything the `quizzer` binary plays: the fixed
//! abbreviation questions, the flat-file top-5 leaderboard, the console and
//! styling seams, and the round and session state machines built on them.

pub mod config;
pub mod console;
pub mod error;
pub mod leaderboard;
pub mod prompt;
pub mod questions;
pub mod round;
pub mod screen;
pub mod session;
pub mod style;

pub use config::{load_config_from, QuizConfig};
pub use error::QuizError;
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use round::{RoundEngine, RoundResult, Tier};
pub use session::Session;
