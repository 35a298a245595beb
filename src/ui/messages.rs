//! One-line user messages (info / success / warning / error).
//! `success` doubles as the notification surface for confirmed check-ins.

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Colour switch for the stdout/stderr helpers below. Screens carry their own.
static COLOR: AtomicBool = AtomicBool::new(true);

pub fn set_color(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

fn color_enabled() -> bool {
    COLOR.load(Ordering::Relaxed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn parts(&self) -> (&'static str, &'static str) {
        match self {
            Level::Info => (FG_BLUE, ICON_INFO),
            Level::Success => (FG_GREEN, ICON_OK),
            Level::Warning => (FG_YELLOW, ICON_WARN),
            Level::Error => (FG_RED, ICON_ERR),
        }
    }
}

/// Build the message line; `color == false` keeps only the icon.
pub fn format_line<T: fmt::Display>(level: Level, msg: T, color: bool) -> String {
    let (fg, icon) = level.parts();
    if color {
        format!("{}{}{} {}{}", fg, BOLD, icon, RESET, msg)
    } else {
        format!("{} {}", icon, msg)
    }
}

/// Write a message line to any output (used by the screens).
pub fn write_line<W: Write, T: fmt::Display>(
    out: &mut W,
    level: Level,
    msg: T,
    color: bool,
) -> io::Result<()> {
    writeln!(out, "{}", format_line(level, msg, color))
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", format_line(Level::Info, msg, color_enabled()));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", format_line(Level::Success, msg, color_enabled()));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", format_line(Level::Warning, msg, color_enabled()));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", format_line(Level::Error, msg, color_enabled()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_line_has_icon_and_text() {
        assert_eq!(
            format_line(Level::Success, "Ponto registrado com sucesso!", false),
            "✅ Ponto registrado com sucesso!"
        );
    }

    #[test]
    fn colored_line_resets_after_icon() {
        let line = format_line(Level::Error, "boom", true);
        assert!(line.starts_with(FG_RED));
        assert!(line.ends_with("boom"));
    }
}
