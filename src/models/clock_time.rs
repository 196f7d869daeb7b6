use serde::Serialize;
use std::fmt;

/// Raw hour/minute pair.
///
/// Values are not range-checked: a misconfigured shortcut may decode to
/// `12:70` and that is carried as-is into the rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ClockTime {
    pub hour: i32,
    pub minute: i32,
}

impl ClockTime {
    pub const fn new(hour: i32, minute: i32) -> Self {
        Self { hour, minute }
    }

    /// True when the pair is a real time of day (0–23 / 0–59).
    pub fn is_valid(&self) -> bool {
        (0..24).contains(&self.hour) && (0..60).contains(&self.minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
