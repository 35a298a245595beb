//! ANSI color helper utilities for terminal output.

use ansi_term::{Colour, Style};
use regex::Regex;
use std::sync::OnceLock;

/// Parse `#RRGGBB` (or `RRGGBB`) into an RGB colour.
pub fn hex_to_colour(hex: &str) -> Option<Colour> {
    let h = hex.trim().trim_start_matches('#');
    if h.len() != 6 || !h.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&h[0..2], 16).ok()?;
    let g = u8::from_str_radix(&h[2..4], 16).ok()?;
    let b = u8::from_str_radix(&h[4..6], 16).ok()?;
    Some(Colour::RGB(r, g, b))
}

/// Paint `text` with foreground `fg` on background `bg`.
/// With `enabled == false` (or unparsable colours) the text is returned as-is.
pub fn paint(text: &str, fg: &str, bg: Option<&str>, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    let Some(fg) = hex_to_colour(fg) else {
        return text.to_string();
    };

    let mut style = Style::new().fg(fg).bold();
    if let Some(bg) = bg.and_then(hex_to_colour) {
        style = style.on(bg);
    }
    style.paint(text).to_string()
}

pub fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"));
    re.replace_all(s, "").into_owned()
}

/// Returns the operation colour used by the log printer.
pub fn colour_for_operation(op: &str) -> Colour {
    match op {
        "init" => Colour::RGB(255, 153, 51),
        "permission" => Colour::Red,
        "location" => Colour::Yellow,
        "geocode" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}
