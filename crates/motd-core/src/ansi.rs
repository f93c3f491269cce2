//! ANSI escape handling: stripping, display-width measurement, and the
//! named-color table widgets use to decorate their lines.

use unicode_width::UnicodeWidthStr;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// Remove every complete SGR sequence (`ESC [ <digits|;> m`) from a line.
///
/// Best effort: only fully formed sequences are stripped. A truncated or
/// malformed sequence is left in place so the caller never loses printable
/// text.
pub fn strip_ansi(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '\u{1b}' && chars.get(i + 1) == Some(&'[') {
            let mut j = i + 2;
            while j < chars.len() && (chars[j].is_ascii_digit() || chars[j] == ';') {
                j += 1;
            }
            if chars.get(j) == Some(&'m') {
                i = j + 1;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}

/// Count of visually printed columns in a line, ignoring SGR sequences.
///
/// Pure; never panics. A line without escapes measures as its plain display
/// width.
pub fn visible_width(line: &str) -> usize {
    strip_ansi(line).width()
}

/// Foreground code for a named color, `None` for unknown names.
pub fn color_code(name: &str) -> Option<&'static str> {
    let code = match name {
        "black" => "\x1b[30m",
        "red" => "\x1b[31m",
        "green" => "\x1b[32m",
        "yellow" => "\x1b[33m",
        "blue" => "\x1b[34m",
        "magenta" => "\x1b[35m",
        "cyan" => "\x1b[36m",
        "white" => "\x1b[37m",
        "bright_black" => "\x1b[90m",
        "bright_red" => "\x1b[91m",
        "bright_green" => "\x1b[92m",
        "bright_yellow" => "\x1b[93m",
        "bright_blue" => "\x1b[94m",
        "bright_magenta" => "\x1b[95m",
        "bright_cyan" => "\x1b[96m",
        "bright_white" => "\x1b[97m",
        _ => return None,
    };
    Some(code)
}

/// Wrap text in ANSI color codes. Unknown color names leave the text
/// unmodified.
pub fn colorize(text: &str, color: &str, bold: bool) -> String {
    match color_code(color) {
        Some(code) if bold => format!("{BOLD}{code}{text}{RESET}"),
        Some(code) => format!("{code}{text}{RESET}"),
        None => text.to_string(),
    }
}
