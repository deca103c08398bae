/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Remaining-hours color:
/// \>0 → blue (still to render)
/// \<=0 → green (goal met or exceeded)
pub fn color_for_remaining(hours: f64) -> &'static str {
    if hours > 0.0 { BLUE } else { GREEN }
}

/// Weekly/entry total color: negative totals flag inconsistent rows.
pub fn color_for_total(minutes: i64) -> &'static str {
    if minutes < 0 { RED } else { RESET }
}
