//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Hours as stored in the data file: always with a fractional part
/// (`2.0`, `3.5`, `0.25`).
pub fn decimal_hours(hours: f64) -> String {
    let s = hours.to_string();
    if s.contains('.') || s.contains('e') || !hours.is_finite() {
        s
    } else {
        format!("{s}.0")
    }
}

/// Hours for human-readable output: `5.5h`, `2h`.
pub fn hours_readable(hours: f64) -> String {
    let rounded = (hours * 100.0).round() / 100.0;
    format!("{}h", rounded)
}

/// Integer hours for the plain-text view. Fractions are dropped, not rounded.
pub fn truncated_hours(hours: f64) -> i64 {
    hours.trunc() as i64
}
