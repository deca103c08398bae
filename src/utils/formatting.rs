//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Hours with two decimals from raw minutes, e.g. 480 → "8.00".
/// Only the display is rounded; aggregation always happens on minutes.
pub fn hours_2dp(minutes: i64) -> String {
    format!("{:.2}", minutes as f64 / 60.0)
}
