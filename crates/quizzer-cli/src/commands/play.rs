//! The `quizzer play` command.

use anyhow::Result;

use quizzer_core::console::TerminalConsole;
use quizzer_core::style::styler;
use quizzer_core::{Leaderboard, RoundEngine, Session};

use crate::PlayArgs;

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = super::resolve_config(&args.common)?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.no_color {
        config.color = false;
    }
    if args.no_clear {
        config.clear_screen = false;
    }
    tracing::debug!(?config, "starting session");

    let engine = RoundEngine::with_seed(Leaderboard::new(&config.leaderboard_path), config.seed);
    let mut session = Session::new(engine, styler(config.color));
    let mut console = TerminalConsole::new(config.clear_screen);

    session.run(&mut console)?;
    Ok(())
}
