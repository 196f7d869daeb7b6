//! Format spec handling and time rendering.
//!
//! Only the first pattern of a [`FormatSpec`] is ever rendered; the rest are
//! accepted input patterns that other parts of a host may parse with.

use crate::errors::{AppError, AppResult};
use crate::models::resolved::placeholder_date;
use chrono::format::{Item, Numeric, Pad, StrftimeItems};
use chrono::{NaiveDateTime, NaiveTime};
use std::fmt::Write;

/// Common admin-framework time input formats.
pub const DEFAULT_TIME_INPUT_FORMATS: [&str; 3] = ["%H:%M:%S", "%H:%M:%S.%f", "%H:%M"];

/// Ordered, non-empty list of strftime patterns whose first entry is known
/// to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    patterns: Vec<String>,
}

impl FormatSpec {
    pub fn new<I, S>(patterns: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        let primary = patterns.first().ok_or(AppError::EmptyFormats)?;
        check_pattern(primary)?;
        Ok(Self { patterns })
    }

    pub fn primary(&self) -> &str {
        &self.patterns[0]
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_TIME_INPUT_FORMATS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

/// Reject patterns chrono cannot parse or cannot render for a naive
/// date/time (e.g. time zone directives).
pub fn check_pattern(pattern: &str) -> AppResult<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(AppError::InvalidFormat(pattern.to_string()));
    }

    let probe = placeholder_date().and_time(NaiveTime::default());
    let mut out = String::new();
    write!(out, "{}", probe.format(pattern))
        .map_err(|_| AppError::InvalidFormat(pattern.to_string()))?;
    Ok(())
}

/// Render `hour:minute` on the placeholder date with the primary pattern.
///
/// Hour and minute directives print the raw values, so an out-of-range
/// minute shows up as e.g. `12:70` instead of rolling over. Every other
/// directive sees the time wrapped into range.
pub fn format(hour: i32, minute: i32, spec: &FormatSpec) -> String {
    let wrapped = NaiveTime::from_hms_opt(
        hour.rem_euclid(24) as u32,
        minute.rem_euclid(60) as u32,
        0,
    )
    .unwrap_or_default();
    let stand_in = placeholder_date().and_time(wrapped);

    let mut out = String::new();
    for item in StrftimeItems::new(spec.primary()) {
        match item {
            Item::Numeric(Numeric::Hour, pad) => push_padded(&mut out, hour, pad),
            Item::Numeric(Numeric::Minute, pad) => push_padded(&mut out, minute, pad),
            other => {
                let _ = write!(out, "{}", stand_in.format_with_items(std::iter::once(other)));
            }
        }
    }
    out
}

/// Render a wall-clock timestamp with the primary pattern.
pub fn format_live(dt: NaiveDateTime, spec: &FormatSpec) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}", dt.format(spec.primary()));
    out
}

fn push_padded(out: &mut String, value: i32, pad: Pad) {
    let _ = match pad {
        Pad::Zero => write!(out, "{:02}", value),
        Pad::Space => write!(out, "{:>2}", value),
        Pad::None => write!(out, "{}", value),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn hm() -> FormatSpec {
        FormatSpec::new(["%H:%M"]).unwrap()
    }

    #[test]
    fn renders_with_primary_pattern() {
        assert_eq!(format(9, 0, &hm()), "09:00");
        assert_eq!(format(10, 20, &hm()), "10:20");
        assert_eq!(format(15, 15, &hm()), "15:15");
    }

    #[test]
    fn secondary_patterns_never_change_output() {
        let a = FormatSpec::new(["%H:%M", "%H:%M:%S"]).unwrap();
        let b = FormatSpec::new(["%H:%M", "%I %p", "%H.%M.%S.%f"]).unwrap();
        assert_eq!(format(11, 40, &a), format(11, 40, &b));
        assert_eq!(format(11, 40, &a), format(11, 40, &hm()));
    }

    #[test]
    fn default_spec_renders_seconds() {
        assert_eq!(format(14, 0, &FormatSpec::default()), "14:00:00");
    }

    #[test]
    fn out_of_range_values_render_best_effort() {
        assert_eq!(format(12, 70, &hm()), "12:70");
        assert_eq!(format(25, 0, &hm()), "25:00");
    }

    #[test]
    fn twelve_hour_directives_use_wrapped_time() {
        let spec = FormatSpec::new(["%I:%M %p"]).unwrap();
        assert_eq!(format(13, 5, &spec), "01:05 PM");
    }

    #[test]
    fn space_padded_hour() {
        let spec = FormatSpec::new(["%k:%M"]).unwrap();
        assert_eq!(format(9, 0, &spec), " 9:00");
    }

    #[test]
    fn empty_and_broken_specs_are_rejected() {
        assert!(matches!(
            FormatSpec::new(Vec::<String>::new()),
            Err(AppError::EmptyFormats)
        ));
        assert!(matches!(
            FormatSpec::new(["%H:%Q"]),
            Err(AppError::InvalidFormat(_))
        ));
    }

    #[test]
    fn only_the_primary_pattern_is_validated() {
        assert!(FormatSpec::new(["%H:%M", "%Q"]).is_ok());
    }

    #[test]
    fn live_rendering_uses_the_timestamp() {
        let dt = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(13, 7, 0)
            .unwrap();
        assert_eq!(format_live(dt, &hm()), "13:07");
        let dated = FormatSpec::new(["%Y-%m-%d %H:%M"]).unwrap();
        assert_eq!(format_live(dt, &dated), "2026-10-19 13:07");
    }
}
