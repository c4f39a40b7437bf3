//! Pluggable text styling.
//!
//! Screen code asks for a [`Tone`] and never emits escape codes itself, so a
//! [`PlainStyler`] can be swapped in wherever output is captured or piped.

use crossterm::style::{Attribute, Color, ContentStyle};

/// The role a piece of text plays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Header title.
    Title,
    /// Header rules.
    Rule,
    /// Section titles.
    Section,
    /// Rules under sections and between questions.
    Divider,
    /// Text that asks the player for input.
    Prompt,
    /// Secondary information.
    Hint,
    /// Emphasised text.
    Strong,
    Success,
    Failure,
    Warning,
}

/// Applies a [`Tone`] to text.
pub trait Styler {
    fn paint(&self, tone: Tone, text: &str) -> String;
}

/// Styling through ANSI escape sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyler;

impl AnsiStyler {
    fn style_for(tone: Tone) -> ContentStyle {
        let (color, attribute) = match tone {
            Tone::Title => (Some(Color::DarkCyan), Some(Attribute::Bold)),
            Tone::Rule => (Some(Color::DarkBlue), None),
            Tone::Section => (Some(Color::DarkMagenta), Some(Attribute::Bold)),
            Tone::Divider => (Some(Color::DarkMagenta), None),
            Tone::Prompt => (Some(Color::DarkCyan), None),
            Tone::Hint => (None, Some(Attribute::Dim)),
            Tone::Strong => (None, Some(Attribute::Bold)),
            Tone::Success => (Some(Color::DarkGreen), None),
            Tone::Failure => (Some(Color::DarkRed), None),
            Tone::Warning => (Some(Color::DarkYellow), None),
        };

        let mut style = ContentStyle::new();
        style.foreground_color = color;
        if let Some(attribute) = attribute {
            style.attributes.set(attribute);
        }
        style
    }
}

impl Styler for AnsiStyler {
    fn paint(&self, tone: Tone, text: &str) -> String {
        Self::style_for(tone).apply(text).to_string()
    }
}

/// No-op styling.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn paint(&self, _: Tone, text: &str) -> String {
        text.to_string()
    }
}

/// Pick a styler from the color setting.
pub fn styler(color: bool) -> Box<dyn Styler> {
    if color {
        Box::new(AnsiStyler)
    } else {
        Box::new(PlainStyler)
    }
}
