/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Color for a decoded shortcut preview:
/// "now" → cyan, real time → green, out of range → red
pub fn color_for_preview(is_now: bool, valid: bool) -> &'static str {
    if is_now {
        CYAN
    } else if valid {
        GREEN
    } else {
        RED
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Grey out empty field values.
pub fn colorize_field(value: &str) -> String {
    if value.trim().is_empty() {
        colorize("(empty)", GREY)
    } else {
        value.to_string()
    }
}
