//! Formatting utilities used for the terminal view and CLI outputs.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

/// Solve time with millisecond precision, e.g. `12.345`.
pub fn format_time(seconds: f64) -> String {
    format!("{:.3}", seconds)
}

/// Best time or `--` when there is none yet.
pub fn format_best(best: Option<f64>) -> String {
    best.map(format_time).unwrap_or_else(|| "--".to_string())
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Remove ANSI colour sequences.
pub fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));
    re.replace_all(s, "").into_owned()
}

/// Display width in terminal columns, ignoring ANSI sequences.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Pad on the right to `width` visible columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Column where `s` must start to appear centred in `total` columns.
pub fn centre_offset(s: &str, total: u16) -> u16 {
    let w = visible_width(s).min(u16::MAX as usize) as u16;
    total.saturating_sub(w) / 2
}

/// Cut to at most `max` visible columns, appending `...` when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 3 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}
