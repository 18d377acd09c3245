/// Console formatting module - Pure rendering concerns
///
/// This module handles:
/// - Terminal emphasis (colors and inverse video) as plain string decoration
/// - Deciding whether the current stdout should get colors
/// - Display-width aware padding for boxed text
///
/// Nothing here writes to the terminal; callers get decorated strings back.

use std::io::IsTerminal;
use term::color::Color;
use unicode_width::UnicodeWidthStr;

const RESET: &str = "\x1b[0m";
const INVERSE: &str = "\x1b[7m";

/// Text styles used by the startup report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Green,
    Yellow,
    Red,
    Blue,
    Grey,
    Inverse,
}

impl Style {
    /// Terminal color for this style, None for attribute-only styles
    fn color(&self) -> Option<Color> {
        match self {
            Style::Green => Some(term::color::GREEN),
            Style::Yellow => Some(term::color::YELLOW),
            Style::Red => Some(term::color::RED),
            Style::Blue => Some(term::color::BLUE),
            Style::Grey => Some(term::color::BRIGHT_BLACK),
            Style::Inverse => None,
        }
    }

    /// ANSI sequence that starts this style
    fn escape(&self) -> String {
        match self.color() {
            // 0-7 are the normal palette, 8-15 the bright one
            Some(c) if c < 8 => format!("\x1b[{}m", 30 + c),
            Some(c) => format!("\x1b[{}m", 90 + (c - 8)),
            None => INVERSE.to_string(),
        }
    }
}

/// Decorates text with terminal styles, or passes it through untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emphasis {
    use_colors: bool,
}

impl Emphasis {
    /// Create an emphasis formatter
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formatter that never decorates (tests, pipes, `--no-color`)
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Pick colors for stdout
    ///
    /// Colors need an interactive terminal that reports color support,
    /// no `NO_COLOR` in the environment, and no `--no-color` flag.
    pub fn detect(no_color: bool) -> Self {
        if no_color || std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal() {
            return Self::plain();
        }
        let supports_color = term::stdout().map(|t| t.supports_color()).unwrap_or(false);
        Self::new(supports_color)
    }

    pub fn uses_colors(&self) -> bool {
        self.use_colors
    }

    /// Wrap text in a style; empty text stays empty
    pub fn emphasize(&self, text: &str, style: Style) -> String {
        if !self.use_colors || text.is_empty() {
            return text.to_string();
        }
        format!("{}{}{}", style.escape(), text, RESET)
    }
}

//
// Text Formatting Utilities
//

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad already-decorated text to a display width measured on its plain form
///
/// Escape sequences take no columns, so the padding is computed from
/// `plain` and appended after `styled`. Text wider than `width` is not cut.
pub fn pad_styled(plain: &str, styled: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(plain));
    format!("{}{}", styled, " ".repeat(padding))
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
