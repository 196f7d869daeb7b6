//! Formatting utilities used for CLI output.

use crate::models::encoded_time::{Decoded, EncodedTime};
use crate::utils::colors::{color_for_preview, colorize};

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// What a code decodes to ("now" or "HH:MM"), colored by validity.
pub fn colored_preview(code: EncodedTime) -> String {
    let (text, is_now, valid) = match code.decode() {
        Decoded::CurrentTime => ("now".to_string(), true, true),
        Decoded::At(t) => (t.to_string(), false, t.is_valid()),
    };
    colorize(&text, color_for_preview(is_now, valid))
}
