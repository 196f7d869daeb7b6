//! Base-100 fixed-point time codes.
//!
//! A shortcut code packs a time of day into one number: the integer part is
//! the hour and the fractional part, read as hundredths, is the minute.
//! `10.2` is 10:20 and `15.15` is 15:15 (not a decimal fraction of an hour).
//! `-1` is reserved for "current time".

use crate::errors::{AppError, AppResult};
use crate::models::clock_time::ClockTime;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EncodedTime(f64);

impl<'de> Deserialize<'de> for EncodedTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = f64::deserialize(deserializer)?;
        if !code.is_finite() {
            return Err(de::Error::custom(AppError::InvalidCode(code.to_string())));
        }
        Ok(Self(code))
    }
}

/// Outcome of decoding a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    /// The caller substitutes the live wall-clock time.
    CurrentTime,
    At(ClockTime),
}

impl EncodedTime {
    pub const NOW: EncodedTime = EncodedTime(-1.0);

    pub const fn from_raw(code: f64) -> Self {
        Self(code)
    }

    pub fn raw(&self) -> f64 {
        self.0
    }

    pub fn is_now(&self) -> bool {
        self.0 == Self::NOW.0
    }

    /// Decode into an hour/minute pair, or the current-time sentinel.
    ///
    /// No range validation: whatever the code says ends up in the pair.
    pub fn decode(&self) -> Decoded {
        if self.is_now() {
            return Decoded::CurrentTime;
        }

        let code = self.0;
        if code.fract() == 0.0 {
            return Decoded::At(ClockTime::new(code as i32, 0));
        }

        let hour = code.floor();
        let minute = ((code - hour) * 100.0).round();
        Decoded::At(ClockTime::new(hour as i32, minute as i32))
    }

    /// Encode a real time of day. Negative hours would collide with the
    /// sentinel and minutes past 59 do not survive a round trip, so both
    /// are rejected here (decode stays permissive).
    pub fn encode(time: ClockTime) -> AppResult<Self> {
        if !time.is_valid() {
            return Err(AppError::InvalidTime(time.to_string()));
        }
        // one division keeps the result the nearest double to `HH.MM`
        Ok(Self(f64::from(time.hour * 100 + time.minute) / 100.0))
    }
}

impl fmt::Display for EncodedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EncodedTime {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: f64 = s
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidCode(s.to_string()))?;
        if !code.is_finite() {
            return Err(AppError::InvalidCode(s.to_string()));
        }
        Ok(Self(code))
    }
}
