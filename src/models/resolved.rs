//! What an activation resolves to.
//!
//! Fixed codes land on a placeholder date while the "now" shortcut carries
//! the real current date. Both shapes are kept apart so callers can tell
//! which one they got.

use crate::models::clock_time::ClockTime;
use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Year/month/day paired with every fixed shortcut time (1970-02-01).
pub const PLACEHOLDER_YMD: (i32, u32, u32) = (1970, 2, 1);

pub fn placeholder_date() -> NaiveDate {
    let (y, m, d) = PLACEHOLDER_YMD;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDateTime {
    pub date: NaiveDate,
    pub time: ClockTime,
}

impl FixedDateTime {
    pub fn new(time: ClockTime) -> Self {
        Self {
            date: placeholder_date(),
            time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveDateTime(pub NaiveDateTime);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTime {
    Fixed(FixedDateTime),
    Live(LiveDateTime),
}

impl ResolvedTime {
    pub fn clock_time(&self) -> ClockTime {
        match self {
            ResolvedTime::Fixed(f) => f.time,
            ResolvedTime::Live(LiveDateTime(dt)) => {
                ClockTime::new(dt.hour() as i32, dt.minute() as i32)
            }
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, ResolvedTime::Live(_))
    }
}
