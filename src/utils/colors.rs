/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";

/// Grey for untracked slots, green for tracked ones.
pub fn color_for_checked(checked: bool) -> &'static str {
    if checked { GREEN } else { GREY }
}

/// Wrap `value` in the slot color, leaving blank cells uncolored.
pub fn colorize_slot(value: &str, checked: bool) -> String {
    if value.trim().is_empty() {
        value.to_string()
    } else {
        format!("{}{value}{RESET}", color_for_checked(checked))
    }
}
