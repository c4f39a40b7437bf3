//! quizzer CLI — terminal abbreviation trivia.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "quizzer",
    version,
    about = "Terminal abbreviation trivia quiz",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // Running without a subcommand plays.
    #[command(flatten)]
    play: PlayArgs,
}

/// Options every command understands.
#[derive(Args, Clone)]
pub struct CommonArgs {
    /// Leaderboard file (default: leaderboard.txt)
    #[arg(long)]
    pub leaderboard: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct PlayArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Seed for the question shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Never clear the screen
    #[arg(long)]
    pub no_clear: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the quiz (the default)
    Play(PlayArgs),

    /// Show the current leaderboard
    Leaderboard {
        #[command(flatten)]
        common: CommonArgs,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quizzer=warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Play(cli.play)) {
        Commands::Play(args) => commands::play::execute(args),
        Commands::Leaderboard { common, format } => commands::leaderboard::execute(common, format),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
