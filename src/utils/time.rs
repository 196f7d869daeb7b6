//! Time utilities: parsing HH:MM and pinning a clock for the current day.

use crate::errors::{AppError, AppResult};
use crate::models::clock_time::ClockTime;
use crate::utils::date;
use chrono::{NaiveDateTime, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_clock_time(t: &str) -> AppResult<ClockTime> {
    let time = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok(ClockTime::new(time.hour() as i32, time.minute() as i32))
}

/// `HH:MM` on today's date.
pub fn today_at(t: &str) -> AppResult<NaiveDateTime> {
    let time = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok(date::today().and_time(time))
}
