//! Line-based console I/O.
//!
//! The game only ever writes whole lines, shows a prompt and waits for one
//! line back, or clears the screen. [`TerminalConsole`] does that against
//! stdin/stdout; [`ScriptedConsole`] replays a fixed list of inputs and keeps
//! a transcript, for tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};

/// Source of player input and sink for game output.
pub trait Console {
    /// Write `line` followed by a newline.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Show `prompt` on the current line and read the player's reply.
    ///
    /// The trailing line ending is removed; nothing else is. Returns
    /// `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Clear the screen, if that means anything for this console.
    fn clear(&mut self) -> io::Result<()>;
}

/// The process's real stdin and stdout.
pub struct TerminalConsole {
    stdin: io::StdinLock<'static>,
    stdout: io::Stdout,
    clear_screen: bool,
}

impl TerminalConsole {
    /// `clear_screen` is still ignored when stdout is not a terminal.
    pub fn new(clear_screen: bool) -> Self {
        let stdout = io::stdout();
        let clear_screen = clear_screen && stdout.is_terminal();
        Self {
            stdin: io::stdin().lock(),
            stdout,
            clear_screen,
        }
    }
}

impl Console for TerminalConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.stdout, "{line}")
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.stdout, "{prompt}")?;
        self.stdout.flush()?;

        let mut buf = String::new();
        if self.stdin.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(buf)))
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            crossterm::execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// A console fed from a fixed list of input lines.
///
/// Every prompt and its answer are appended to the transcript on one line, the
/// way they would appear on a terminal.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
    clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
            clears: 0,
        }
    }

    /// Everything written so far, one entry per line.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// The transcript joined with newlines.
    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }

    /// Number of times a prompt was shown.
    pub fn prompts_shown(&self, prompt: &str) -> usize {
        self.transcript
            .iter()
            .filter(|line| line.starts_with(prompt))
            .count()
    }

    /// Inputs not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        // Multi-line writes are split so the transcript stays one line per entry.
        self.transcript.extend(line.split('\n').map(str::to_string));
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let input = self.inputs.pop_front();
        self.transcript
            .push(format!("{prompt}{}", input.as_deref().unwrap_or_default()));
        Ok(input)
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_unix_and_windows_line_endings() {
        assert_eq!(strip_line_ending("yes\n".into()), "yes");
        assert_eq!(strip_line_ending("yes\r\n".into()), "yes");
        assert_eq!(strip_line_ending("  yes  ".into()), "  yes  ");
    }

    #[test]
    fn scripted_console_replays_inputs_then_reports_eof() {
        let mut console = ScriptedConsole::new(["Zoe"]);

        assert_eq!(console.read_line("Name: ").unwrap().as_deref(), Some("Zoe"));
        assert_eq!(console.read_line("Name: ").unwrap(), None);
        assert_eq!(console.transcript(), ["Name: Zoe", "Name: "]);
        assert_eq!(console.prompts_shown("Name: "), 2);
    }

    #[test]
    fn scripted_console_splits_multiline_writes() {
        let mut console = ScriptedConsole::default();
        console.write_line("a\nb").unwrap();
        console.clear().unwrap();

        assert_eq!(console.transcript(), ["a", "b"]);
        assert_eq!(console.clears(), 1);
    }
}
