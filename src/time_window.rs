//! Hazard activity windows.
//!
//! A hazard's `active_hours` field is free text. Three forms are
//! recognised:
//!
//! - `"All day"`: always active.
//! - `"Monsoon"`: active during [`SEASONAL_MONTHS`].
//! - `"HH:MM-HH:MM"`: active when the minute of day falls in the inclusive
//!   range. Windows whose start is after their end (crossing midnight)
//!   are not supported and are treated as malformed.
//!
//! Anything else evaluates to inactive. Parsing never fails; the raw text is
//! kept so catalogs serialize back exactly as they were read.

use std::fmt;
use std::ops::RangeInclusive;

use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};

/// Calendar months (1-based) during which seasonal hazards are active.
pub const SEASONAL_MONTHS: RangeInclusive<u32> = 6..=10;

pub const ALWAYS_LABEL: &str = "All day";
pub const SEASONAL_LABEL: &str = "Monsoon";

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Interpreted form of an activity window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    Always,
    Seasonal,
    /// Inclusive minute-of-day bounds, `start_minute <= end_minute`.
    Daily { start_minute: u32, end_minute: u32 },
    /// Unrecognised or malformed text.
    Never,
}

/// An activity window as it appears in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ActivityWindow {
    raw: String,
    schedule: Schedule,
}

impl ActivityWindow {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let schedule = parse_schedule(&raw);
        Self { raw, schedule }
    }

    pub fn always() -> Self {
        Self::parse(ALWAYS_LABEL)
    }

    pub fn seasonal() -> Self {
        Self::parse(SEASONAL_LABEL)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    /// True when the text was recognised as one of the supported forms.
    pub fn is_recognized(&self) -> bool {
        self.schedule != Schedule::Never
    }

    /// Evaluates the window against the wall-clock fields of `instant`.
    pub fn is_active_at<T: Datelike + Timelike>(&self, instant: &T) -> bool {
        match self.schedule {
            Schedule::Always => true,
            Schedule::Seasonal => SEASONAL_MONTHS.contains(&instant.month()),
            Schedule::Daily {
                start_minute,
                end_minute,
            } => {
                let now = instant.hour() * 60 + instant.minute();
                (start_minute..=end_minute).contains(&now)
            }
            Schedule::Never => false,
        }
    }
}

impl From<String> for ActivityWindow {
    fn from(raw: String) -> Self {
        Self::parse(raw)
    }
}

impl From<&str> for ActivityWindow {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<ActivityWindow> for String {
    fn from(window: ActivityWindow) -> Self {
        window.raw
    }
}

impl fmt::Display for ActivityWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Evaluates an optional window; a missing window is inactive.
pub fn is_active<T: Datelike + Timelike>(window: Option<&ActivityWindow>, instant: &T) -> bool {
    window.is_some_and(|w| w.is_active_at(instant))
}

fn parse_schedule(raw: &str) -> Schedule {
    let text = raw.trim();
    if text == ALWAYS_LABEL {
        return Schedule::Always;
    }
    if text == SEASONAL_LABEL {
        return Schedule::Seasonal;
    }

    let Some((start, end)) = text.split_once('-') else {
        return Schedule::Never;
    };
    match (parse_clock(start), parse_clock(end)) {
        (Some(start_minute), Some(end_minute)) if start_minute <= end_minute => Schedule::Daily {
            start_minute,
            end_minute,
        },
        _ => Schedule::Never,
    }
}

/// Parses `H:MM` / `HH:MM` into minutes after midnight.
///
/// Minutes must have two digits: `"07:5"` is rejected rather than read as
/// 07:05, so a window such as `"07:5-21:00"` never becomes active.
fn parse_clock(text: &str) -> Option<u32> {
    let (hour, minute) = text.trim().split_once(':')?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return None;
    }
    if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }

    let total = hour * 60 + minute;
    (total < MINUTES_PER_DAY).then_some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(month: u32, hour: u32, minute: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, month, 15)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_all_day_always_active() {
        let window = ActivityWindow::always();
        for month in 1..=12 {
            for hour in [0, 6, 12, 23] {
                assert!(window.is_active_at(&at(month, hour, 59)));
            }
        }
    }

    #[test]
    fn test_daily_window() {
        let window = ActivityWindow::parse("07:00-21:00");
        assert!(window.is_active_at(&at(3, 12, 0)));
        assert!(!window.is_active_at(&at(3, 23, 0)));
        assert!(!window.is_active_at(&at(3, 6, 59)));
    }

    #[test]
    fn test_daily_window_bounds_inclusive() {
        let window = ActivityWindow::parse("10:00-22:00");
        assert!(window.is_active_at(&at(1, 10, 0)));
        assert!(window.is_active_at(&at(1, 22, 0)));
        assert!(!window.is_active_at(&at(1, 22, 1)));
    }

    #[test]
    fn test_single_digit_hour_and_spaces() {
        let window = ActivityWindow::parse("9:10 - 18:40");
        assert_eq!(
            window.schedule(),
            Schedule::Daily {
                start_minute: 550,
                end_minute: 1120
            }
        );
    }

    #[test]
    fn test_single_digit_minute_rejected() {
        let window = ActivityWindow::parse("07:5-21:00");
        assert_eq!(window.schedule(), Schedule::Never);
        assert!(!window.is_active_at(&at(3, 12, 0)));
    }

    #[test]
    fn test_monsoon() {
        let window = ActivityWindow::seasonal();
        assert!(window.is_active_at(&at(8, 12, 0)));
        assert!(window.is_active_at(&at(6, 0, 0)));
        assert!(window.is_active_at(&at(10, 23, 59)));
        assert!(!window.is_active_at(&at(1, 12, 0)));
        assert!(!window.is_active_at(&at(5, 12, 0)));
        assert!(!window.is_active_at(&at(11, 12, 0)));
    }

    #[test]
    fn test_midnight_crossing_is_inactive() {
        let window = ActivityWindow::parse("22:00-06:00");
        assert_eq!(window.schedule(), Schedule::Never);
        assert!(!window.is_active_at(&at(1, 23, 0)));
        assert!(!window.is_active_at(&at(1, 3, 0)));
    }

    #[test]
    fn test_malformed_is_inactive() {
        for raw in ["", "Nights", "7-21", "07:00", "25:00-26:00", "07:60-08:00", "ab:cd-ef:gh", "07:00-21:00-23:00"] {
            let window = ActivityWindow::parse(raw);
            assert!(!window.is_recognized(), "{raw:?} should not parse");
            assert!(!window.is_active_at(&at(7, 12, 0)));
        }
    }

    #[test]
    fn test_missing_window_is_inactive() {
        assert!(!is_active(None, &at(7, 12, 0)));
        assert!(is_active(Some(&ActivityWindow::always()), &at(7, 12, 0)));
    }

    #[test]
    fn test_raw_text_round_trips() {
        let window: ActivityWindow = serde_json::from_str("\"7:00-21:00\"").unwrap();
        assert!(window.is_recognized());
        assert_eq!(serde_json::to_string(&window).unwrap(), "\"7:00-21:00\"");
    }
}
