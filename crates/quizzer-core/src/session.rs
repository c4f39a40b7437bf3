//! Top-level session: greet, play rounds until the player stops, say goodbye.

use crate::console::Console;
use crate::error::Result;
use crate::prompt;
use crate::round::{RoundEngine, RoundResult};
use crate::screen;
use crate::style::{Styler, Tone};

/// Name used when the player leaves the name prompt blank.
pub const DEFAULT_PLAYER: &str = "Player";

const RULES: [&str; 3] = [
    "• Answers are not case-sensitive.",
    "• No negative marks.",
    "• You can choose how many questions to attempt.",
];

#[derive(Debug)]
enum State {
    Greeting,
    Playing { player: String },
    Ended { farewell: &'static str, tone: Tone },
}

/// What happened over a whole session.
#[derive(Debug, Clone, Default)]
pub struct SessionSummary {
    /// `None` if the session ended before the name was read.
    pub player: Option<String>,
    pub rounds: Vec<RoundResult>,
}

/// Drives the greeting, round loop, and farewell.
pub struct Session {
    engine: RoundEngine,
    styler: Box<dyn Styler>,
}

impl Session {
    pub fn new(engine: RoundEngine, styler: Box<dyn Styler>) -> Self {
        Self { engine, styler }
    }

    /// Run until the player declines to start or to play again.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut state = State::Greeting;

        loop {
            state = match state {
                State::Greeting => {
                    let player = self.greet(console)?;
                    summary.player = Some(player.clone());
                    if prompt::ask_yes_no(console, self.styler.as_ref(), "Ready to play?")? {
                        State::Playing { player }
                    } else {
                        State::Ended {
                            farewell: "Maybe next time. Goodbye! 👋",
                            tone: Tone::Warning,
                        }
                    }
                }
                State::Playing { player } => {
                    let styler = self.styler.as_ref();
                    console.clear()?;
                    screen::header(console, styler, screen::TITLE)?;
                    console.write_line(
                        &styler.paint(Tone::Strong, &format!("Good luck, {player}!")),
                    )?;

                    summary
                        .rounds
                        .push(self.engine.play_round(console, styler, &player)?);

                    console.write_line("")?;
                    if prompt::ask_yes_no(console, styler, "Do you want to play again?")? {
                        State::Playing { player }
                    } else {
                        State::Ended {
                            farewell: "Thanks for playing! Goodbye 👋",
                            tone: Tone::Prompt,
                        }
                    }
                }
                State::Ended { farewell, tone } => {
                    console.write_line(&self.styler.paint(tone, farewell))?;
                    tracing::debug!("session ended after {} round(s)", summary.rounds.len());
                    return Ok(summary);
                }
            };
        }
    }

    fn greet(&self, console: &mut dyn Console) -> Result<String> {
        let styler = self.styler.as_ref();
        console.clear()?;
        screen::header(console, styler, screen::TITLE)?;

        let player = player_name(&prompt::ask_text(console, styler, "Enter your name: ")?);

        console.write_line("")?;
        console.write_line(&styler.paint(Tone::Strong, "Rules:"))?;
        for rule in RULES {
            console.write_line(&styler.paint(Tone::Hint, rule))?;
        }
        Ok(player)
    }
}

/// The name to record for a raw name entry.
///
/// Commas are the leaderboard's field separator, so they become spaces.
pub fn player_name(raw: &str) -> String {
    let name = raw.replace(',', " ");
    let name = name.trim();
    if name.is_empty() {
        DEFAULT_PLAYER.to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::leaderboard::{Leaderboard, LeaderboardEntry};
    use crate::round::shuffle_bank;
    use crate::style::PlainStyler;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SEED: u64 = 42;

    fn session_in(dir: &tempfile::TempDir) -> (Session, Leaderboard) {
        let board = Leaderboard::new(dir.path().join("leaderboard.txt"));
        let engine = RoundEngine::with_seed(board.clone(), Some(SEED));
        (Session::new(engine, Box::new(PlainStyler)), board)
    }

    #[test]
    fn blank_name_defaults_to_player() {
        assert_eq!(player_name(""), "Player");
        assert_eq!(player_name("   "), "Player");
        assert_eq!(player_name(" Zoe "), "Zoe");
        assert_eq!(player_name("Doe, Jane"), "Doe  Jane");
        assert_eq!(player_name(","), "Player");
    }

    #[test]
    fn declining_to_start_ends_without_playing() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, board) = session_in(&dir);
        let mut console = ScriptedConsole::new(["Zoe", "maybe", "no"]);

        let summary = session.run(&mut console).unwrap();

        assert!(summary.rounds.is_empty());
        assert_eq!(summary.player.as_deref(), Some("Zoe"));
        assert!(console.output().contains("Rules:"));
        assert!(console.output().contains("Please type yes or no."));
        assert!(console.output().ends_with("Maybe next time. Goodbye! 👋"));
        assert!(!board.path().exists());
    }

    #[test]
    fn perfect_round_then_quit() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, board) = session_in(&dir);
        let order = shuffle_bank(&mut StdRng::seed_from_u64(SEED));

        let mut inputs = vec!["Zoe".to_string(), "yes".to_string(), "5".to_string()];
        inputs.extend(order[..5].iter().map(|q| q.answer.to_string()));
        inputs.push("n".to_string());
        let mut console = ScriptedConsole::new(inputs);

        let summary = session.run(&mut console).unwrap();

        assert_eq!(summary.rounds.len(), 1);
        assert_eq!(summary.rounds[0].score, 5);
        assert_eq!(std::fs::read_to_string(board.path()).unwrap(), "Zoe,5\n");
        assert!(console.output().contains("Good luck, Zoe!"));
        assert!(console.output().ends_with("Thanks for playing! Goodbye 👋"));
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn play_again_loops_with_fresh_header() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, board) = session_in(&dir);
        let mut console = ScriptedConsole::new(["", "Y", "1", "x", "YES", "1", "x", "No"]);

        let summary = session.run(&mut console).unwrap();

        assert_eq!(summary.rounds.len(), 2);
        assert_eq!(console.prompts_shown("Do you want to play again? (yes/no): "), 2);
        let greetings = console
            .transcript()
            .iter()
            .filter(|l| *l == "Good luck, Player!")
            .count();
        assert_eq!(greetings, 2);
        // One clear for the greeting and one per round.
        assert_eq!(console.clears(), 3);
        assert_eq!(
            board.load().unwrap(),
            vec![
                LeaderboardEntry::new("Player", 0),
                LeaderboardEntry::new("Player", 0)
            ]
        );
    }

    #[test]
    fn input_ending_mid_round_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _board) = session_in(&dir);
        let mut console = ScriptedConsole::new(["Zoe", "yes", "2", "x"]);

        let err = session.run(&mut console).unwrap_err();

        assert!(matches!(err, crate::QuizError::InputClosed));
    }
}
