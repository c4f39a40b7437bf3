//! One play-through: pick questions, ask them, score, record the result.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::console::Console;
use crate::error::Result;
use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::prompt::{self, QuestionCount};
use crate::questions::{self, Question};
use crate::screen;
use crate::style::{Styler, Tone};

/// Qualitative bucket for a percentage score. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// 80% and above.
    Excellent,
    /// 60% up to 80%.
    Good,
    /// Below 60%.
    KeepPracticing,
}

impl Tier {
    pub fn from_percentage(percent: f64) -> Self {
        if percent >= 80.0 {
            Tier::Excellent
        } else if percent >= 60.0 {
            Tier::Good
        } else {
            Tier::KeepPracticing
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Tier::Excellent => "🎉 Excellent!",
            Tier::Good => "👍 Good job!",
            Tier::KeepPracticing => "💪 Keep practicing!",
        }
    }

    fn tone(self) -> Tone {
        match self {
            Tier::Excellent => Tone::Success,
            Tier::Good => Tone::Warning,
            Tier::KeepPracticing => Tone::Failure,
        }
    }
}

/// `score / asked * 100`, or 0 when nothing was asked.
pub fn percentage(score: u32, asked: usize) -> f64 {
    if asked == 0 {
        return 0.0;
    }
    f64::from(score) / asked as f64 * 100.0
}

/// The full bank in a uniformly random order.
pub fn shuffle_bank<R: Rng + ?Sized>(rng: &mut R) -> Vec<Question> {
    let mut all = questions::bank().to_vec();
    all.shuffle(rng);
    all
}

/// What a finished round produced.
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub player: String,
    pub score: u32,
    pub asked: usize,
    pub elapsed: Duration,
    /// The leaderboard as saved after this round.
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl RoundResult {
    pub fn percentage(&self) -> f64 {
        percentage(self.score, self.asked)
    }

    pub fn tier(&self) -> Tier {
        Tier::from_percentage(self.percentage())
    }
}

/// Runs rounds against one leaderboard with one randomness source.
pub struct RoundEngine {
    leaderboard: Leaderboard,
    rng: StdRng,
}

impl RoundEngine {
    pub fn new(leaderboard: Leaderboard, rng: StdRng) -> Self {
        Self { leaderboard, rng }
    }

    /// Seed the shuffle for repeatable question order, or draw from the OS.
    pub fn with_seed(leaderboard: Leaderboard, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(leaderboard, rng)
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Ask how many of `total` questions to attempt.
    pub fn choose_question_count(
        console: &mut dyn Console,
        styler: &dyn Styler,
        total: usize,
    ) -> Result<usize> {
        screen::section(console, styler, "⚙️  Settings")?;
        console.write_line(&styler.paint(
            Tone::Hint,
            &format!("There are {total} questions available."),
        ))?;
        console.write_line(&styler.paint(Tone::Hint, "Tip: Press Enter for all questions."))?;
        prompt::ask(
            console,
            styler,
            "How many questions do you want to attempt? ",
            &QuestionCount { total },
        )
    }

    /// Play one round for `player` and record the score.
    pub fn play_round(
        &mut self,
        console: &mut dyn Console,
        styler: &dyn Styler,
        player: &str,
    ) -> Result<RoundResult> {
        let mut asked = shuffle_bank(&mut self.rng);
        let count = Self::choose_question_count(console, styler, asked.len())?;
        asked.truncate(count);

        screen::section(console, styler, "🧠 Quiz Started")?;
        console.write_line(&styler.paint(Tone::Hint, "Type your answer (not case-sensitive)."))?;

        let mut score = 0u32;
        let start = Instant::now();
        for (idx, question) in asked.iter().enumerate() {
            if ask_question(console, styler, idx + 1, question)? {
                score += 1;
            }
        }
        let elapsed = start.elapsed();

        tracing::info!(
            "round finished: {player} scored {score}/{} in {:.1}s",
            asked.len(),
            elapsed.as_secs_f64()
        );

        let mut result = RoundResult {
            player: player.to_string(),
            score,
            asked: asked.len(),
            elapsed,
            leaderboard: Vec::new(),
        };
        // Results are shown before the leaderboard file is touched.
        show_results(console, styler, &result)?;
        result.leaderboard = self.leaderboard.update(player, score)?;
        screen::show_leaderboard(console, styler, &result.leaderboard)?;
        Ok(result)
    }
}

/// Ask a single question. Returns whether the answer was correct.
fn ask_question(
    console: &mut dyn Console,
    styler: &dyn Styler,
    number: usize,
    question: &Question,
) -> Result<bool> {
    console.write_line("")?;
    console.write_line(&styler.paint(
        Tone::Strong,
        &format!("Q{number:02}: {}", question.prompt),
    ))?;
    let answer = prompt::ask_text(console, styler, "Your answer: ")?;

    let correct = question.is_correct(&answer);
    if correct {
        console.write_line(&styler.paint(Tone::Success, "✅ Correct!"))?;
    } else {
        console.write_line(&format!(
            "{} {}",
            styler.paint(Tone::Failure, "❌ Incorrect!"),
            styler.paint(
                Tone::Hint,
                &format!("Correct: {}", question.display_answer())
            ),
        ))?;
    }
    screen::divider(console, styler)?;
    Ok(correct)
}

fn show_results(console: &mut dyn Console, styler: &dyn Styler, result: &RoundResult) -> Result<()> {
    screen::section(console, styler, "📊 Results")?;
    console.write_line(&format!(
        "{}, you answered {}/{} correctly.",
        result.player,
        styler.paint(Tone::Success, &result.score.to_string()),
        result.asked,
    ))?;
    console.write_line(&format!(
        "Your score: {}",
        styler.paint(Tone::Strong, &format!("{:.2}%", result.percentage()))
    ))?;
    console.write_line(&styler.paint(
        Tone::Hint,
        &format!("Time taken: {:.1} seconds", result.elapsed.as_secs_f64()),
    ))?;
    let tier = result.tier();
    console.write_line(&styler.paint(tier.tone(), tier.message()))?;
    Ok(())
}
