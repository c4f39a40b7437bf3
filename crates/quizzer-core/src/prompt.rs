//! Re-prompting input validation.
//!
//! Each prompt runs a tiny state machine: it is `Pending` until a line is read,
//! the line is judged `Valid` or `Invalid`, and an invalid line shows a hint
//! and goes back to `Pending`. There is no retry limit; only end-of-input
//! breaks the loop, as [`QuizError::InputClosed`].

use crate::console::Console;
use crate::error::{QuizError, Result};
use crate::style::{Styler, Tone};

/// Outcome of checking one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<T> {
    Valid(T),
    Invalid,
}

/// Judges raw input lines for a prompt.
pub trait Validator {
    type Output;

    /// Check one raw line (line ending already removed).
    fn check(&self, raw: &str) -> Verdict<Self::Output>;

    /// Shown after an invalid line.
    fn hint(&self) -> String;
}

/// Accepts `y`/`yes` as `true` and `n`/`no` as `false`, in any case.
#[derive(Debug, Clone, Copy, Default)]
pub struct YesNo;

impl Validator for YesNo {
    type Output = bool;

    fn check(&self, raw: &str) -> Verdict<bool> {
        match raw.trim().to_lowercase().as_str() {
            "y" | "yes" => Verdict::Valid(true),
            "n" | "no" => Verdict::Valid(false),
            _ => Verdict::Invalid,
        }
    }

    fn hint(&self) -> String {
        "Please type yes or no.".to_string()
    }
}

/// Accepts a question count in `1..=total`; a blank line means all of them.
#[derive(Debug, Clone, Copy)]
pub struct QuestionCount {
    pub total: usize,
}

impl Validator for QuestionCount {
    type Output = usize;

    fn check(&self, raw: &str) -> Verdict<usize> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Verdict::Valid(self.total);
        }
        if !raw.chars().all(|c| c.is_ascii_digit()) {
            return Verdict::Invalid;
        }
        match raw.parse::<usize>() {
            Ok(n) if (1..=self.total).contains(&n) => Verdict::Valid(n),
            _ => Verdict::Invalid,
        }
    }

    fn hint(&self) -> String {
        format!(
            "Enter a number between 1 and {} or leave blank.",
            self.total
        )
    }
}

enum PromptState<T> {
    Pending,
    Invalid,
    Valid(T),
}

/// Ask until `validator` accepts a line.
pub fn ask<V: Validator>(
    console: &mut dyn Console,
    styler: &dyn Styler,
    prompt: &str,
    validator: &V,
) -> Result<V::Output> {
    let prompt = styler.paint(Tone::Prompt, prompt);
    let mut state = PromptState::Pending;
    loop {
        state = match state {
            PromptState::Pending => {
                let raw = console.read_line(&prompt)?.ok_or(QuizError::InputClosed)?;
                match validator.check(&raw) {
                    Verdict::Valid(value) => PromptState::Valid(value),
                    Verdict::Invalid => PromptState::Invalid,
                }
            }
            PromptState::Invalid => {
                console.write_line(&styler.paint(Tone::Warning, &validator.hint()))?;
                PromptState::Pending
            }
            PromptState::Valid(value) => return Ok(value),
        };
    }
}

/// Ask a yes/no question. `" (yes/no): "` is appended to `question`.
pub fn ask_yes_no(console: &mut dyn Console, styler: &dyn Styler, question: &str) -> Result<bool> {
    ask(console, styler, &format!("{question} (yes/no): "), &YesNo)
}

/// Read one free-text line, trimmed. Any text is accepted.
pub fn ask_text(console: &mut dyn Console, styler: &dyn Styler, prompt: &str) -> Result<String> {
    let prompt = styler.paint(Tone::Prompt, prompt);
    let raw = console.read_line(&prompt)?.ok_or(QuizError::InputClosed)?;
    Ok(raw.trim().to_string())
}
