//! The `quizzer leaderboard` command.

use anyhow::Result;

use quizzer_core::screen::leaderboard_table;
use quizzer_core::Leaderboard;

use crate::CommonArgs;

pub fn execute(common: CommonArgs, format: String) -> Result<()> {
    let config = super::resolve_config(&common)?;
    let board = Leaderboard::new(&config.leaderboard_path);
    let entries = board.load()?;

    match format.as_str() {
        "text" => {
            if entries.is_empty() {
                println!("No scores yet. Be the first!");
            } else {
                println!("{}", leaderboard_table(&entries));
            }
        }
        "json" => println!("{}", serde_json::to_string_pretty(&entries)?),
        other => anyhow::bail!("unknown format '{other}' (expected text or json)"),
    }

    Ok(())
}
