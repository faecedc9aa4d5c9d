//! Colour choices shared by the terminal view and CLI output.
use ansi_term::Colour;

/// Colour of an elapsed time compared with the current best:
/// better → green, equal or worse → red, no best yet → yellow.
pub fn colour_for_result(elapsed: f64, best: Option<f64>) -> Colour {
    match best {
        Some(b) if elapsed < b => Colour::Green,
        Some(_) => Colour::Red,
        None => Colour::Yellow,
    }
}

/// Colour for an internal log operation.
pub fn colour_for_operation(op: &str) -> Colour {
    match op {
        "new_best" => Colour::Green,
        "repair" => Colour::Red,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Grey for empty values (`--`), plain otherwise.
pub fn colourize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        Colour::Fixed(8).paint(value).to_string()
    } else {
        value.to_string()
    }
}
