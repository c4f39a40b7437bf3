pub mod leaderboard;
pub mod play;

use anyhow::Result;
use quizzer_core::{load_config_from, QuizConfig};

use crate::CommonArgs;

/// Load the config file, then let command-line flags win.
fn resolve_config(common: &CommonArgs) -> Result<QuizConfig> {
    let mut config = load_config_from(common.config.as_deref())?;
    if let Some(path) = &common.leaderboard {
        config.leaderboard_path = path.clone();
    }
    Ok(config)
}
