//! Game configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::leaderboard::DEFAULT_PATH;

/// Settings that are fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Where the leaderboard is kept.
    #[serde(default = "default_leaderboard_path")]
    pub leaderboard_path: PathBuf,
    /// Colorize output.
    #[serde(default = "default_true")]
    pub color: bool,
    /// Clear the screen before the greeting and each round.
    #[serde(default = "default_true")]
    pub clear_screen: bool,
    /// Fixed shuffle seed; random when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_leaderboard_path() -> PathBuf {
    PathBuf::from(DEFAULT_PATH)
}

fn default_true() -> bool {
    true
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            leaderboard_path: default_leaderboard_path(),
            color: true,
            clear_screen: true,
            seed: None,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `quizzer.toml` in the current directory
/// 2. `~/.config/quizzer/config.toml`
///
/// `QUIZZER_LEADERBOARD` overrides the leaderboard path.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizzer.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizConfig::default(),
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

fn parse_config(content: &str) -> Result<QuizConfig> {
    Ok(toml::from_str::<QuizConfig>(content)?)
}

fn apply_env_overrides(config: &mut QuizConfig) {
    if let Some(path) = std::env::var_os("QUIZZER_LEADERBOARD") {
        if path.is_empty() {
            tracing::warn!("QUIZZER_LEADERBOARD is set but empty, ignoring");
        } else {
            config.leaderboard_path = PathBuf::from(path);
        }
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizzer"))
}
