//! Headers, sections, and the leaderboard table.

use comfy_table::{Cell, CellAlignment, Table};

use crate::console::Console;
use crate::error::Result;
use crate::leaderboard::LeaderboardEntry;
use crate::style::{Styler, Tone};

/// Width of rules and of the centered header title.
pub const WIDTH: usize = 60;

pub const TITLE: &str = "COMPUTER QUIZ • Abbreviations Edition";

/// A horizontal rule of `ch`.
pub fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(WIDTH).collect()
}

/// Write a boxed, centered title.
pub fn header(console: &mut dyn Console, styler: &dyn Styler, title: &str) -> Result<()> {
    let heavy = styler.paint(Tone::Rule, &rule('═'));
    console.write_line(&heavy)?;
    console.write_line(&styler.paint(Tone::Title, &format!("{title:^width$}", width = WIDTH)))?;
    console.write_line(&heavy)?;
    Ok(())
}

/// Write a section title with a light rule under it.
pub fn section(console: &mut dyn Console, styler: &dyn Styler, title: &str) -> Result<()> {
    console.write_line("")?;
    console.write_line(&styler.paint(Tone::Section, title))?;
    divider(console, styler)
}

/// Write a light rule.
pub fn divider(console: &mut dyn Console, styler: &dyn Styler) -> Result<()> {
    console.write_line(&styler.paint(Tone::Divider, &rule('─')))?;
    Ok(())
}

/// Build the ranked table for `entries`.
pub fn leaderboard_table(entries: &[LeaderboardEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Player", "Score"]);
    for (rank, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1).set_alignment(CellAlignment::Right),
            Cell::new(&entry.name),
            Cell::new(entry.score).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Write the leaderboard section, or an invitation if it is empty.
pub fn show_leaderboard(
    console: &mut dyn Console,
    styler: &dyn Styler,
    entries: &[LeaderboardEntry],
) -> Result<()> {
    section(console, styler, "🏆 Leaderboard (Top 5)")?;
    if entries.is_empty() {
        console.write_line(&styler.paint(Tone::Warning, "No scores yet. Be the first!"))?;
        return Ok(());
    }
    console.write_line(&leaderboard_table(entries).to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::style::PlainStyler;

    #[test]
    fn header_is_centered_between_rules() {
        let mut console = ScriptedConsole::default();
        header(&mut console, &PlainStyler, TITLE).unwrap();

        let lines = console.transcript();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].chars().count(), WIDTH);
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[1].chars().count(), WIDTH);
        assert_eq!(lines[1].trim(), TITLE);
    }

    #[test]
    fn section_has_blank_line_title_and_rule() {
        let mut console = ScriptedConsole::default();
        section(&mut console, &PlainStyler, "📊 Results").unwrap();

        let light = rule('─');
        assert_eq!(console.transcript(), ["", "📊 Results", light.as_str()]);
    }

    #[test]
    fn empty_leaderboard_invites_first_score() {
        let mut console = ScriptedConsole::default();
        show_leaderboard(&mut console, &PlainStyler, &[]).unwrap();

        assert!(console.output().contains("No scores yet. Be the first!"));
    }

    #[test]
    fn leaderboard_lists_ranks_in_order() {
        let entries = vec![
            LeaderboardEntry::new("Zoe", 5),
            LeaderboardEntry::new("Ann", 3),
        ];
        let rendered = leaderboard_table(&entries).to_string();

        let zoe = rendered.find("Zoe").unwrap();
        let ann = rendered.find("Ann").unwrap();
        assert!(zoe < ann);
        assert!(rendered.contains("Player"));
        assert!(rendered.contains("Score"));
    }
}
