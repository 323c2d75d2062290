//! Duration values: parsing to seconds and formatting

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::types::CellValue;
use crate::utils::error::PermissionError;

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3_600.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

static PLAIN_SECONDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+(?:\.\d*)?|\.\d+)$").expect("Invalid seconds regex"));

// [days d] h:mm[:ss[.fff]]
static CLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:(\d+)\s*d\s+)?(\d+):(\d{1,2})(?::(\d{1,2}(?:\.\d+)?))?$")
        .expect("Invalid clock regex")
});

// 1d 2h 3m 4.5s, every part optional
static UNITS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:(\d+)\s*d)?\s*(?:(\d+)\s*h)?\s*(?:(\d+)\s*m(?:in)?)?\s*(?:(\d+(?:\.\d+)?)\s*s)?$",
    )
    .expect("Invalid units regex")
});

fn capture_f64(caps: &regex::Captures<'_>, index: usize) -> f64 {
    caps.get(index)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Parse a textual duration into seconds; `None` when the text is not a duration
pub fn parse_duration(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest.trim_start()),
        None => (1.0, trimmed),
    };

    if body.is_empty() {
        return None;
    }

    if PLAIN_SECONDS.is_match(body) {
        return body.parse::<f64>().ok().map(|seconds| sign * seconds);
    }

    if let Some(caps) = CLOCK.captures(body) {
        let seconds = capture_f64(&caps, 1) * SECONDS_PER_DAY
            + capture_f64(&caps, 2) * SECONDS_PER_HOUR
            + capture_f64(&caps, 3) * SECONDS_PER_MINUTE
            + capture_f64(&caps, 4);
        return Some(sign * seconds);
    }

    if let Some(caps) = UNITS.captures(body) {
        if (1..=4).all(|i| caps.get(i).is_none()) {
            return None;
        }
        let seconds = capture_f64(&caps, 1) * SECONDS_PER_DAY
            + capture_f64(&caps, 2) * SECONDS_PER_HOUR
            + capture_f64(&caps, 3) * SECONDS_PER_MINUTE
            + capture_f64(&caps, 4);
        return Some(sign * seconds);
    }

    None
}

/// Normalize a duration cell to seconds. Numbers are seconds already.
pub fn duration_seconds(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::Null => None,
        CellValue::Number(seconds) => Some(*seconds).filter(|s| s.is_finite()),
        CellValue::Text(text) => parse_duration(text),
    }
}

/// Display format of a duration field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationFormat {
    #[default]
    #[serde(rename = "h:mm")]
    HoursMinutes,
    #[serde(rename = "h:mm:ss")]
    HoursMinutesSeconds,
    #[serde(rename = "h:mm:ss.s")]
    Deciseconds,
    #[serde(rename = "h:mm:ss.ss")]
    Centiseconds,
    #[serde(rename = "h:mm:ss.sss")]
    Milliseconds,
    #[serde(rename = "d h")]
    DaysHours,
    #[serde(rename = "d h:mm")]
    DaysHoursMinutes,
    #[serde(rename = "d h:mm:ss")]
    DaysHoursMinutesSeconds,
}

impl DurationFormat {
    pub const ALL: [DurationFormat; 8] = [
        Self::HoursMinutes,
        Self::HoursMinutesSeconds,
        Self::Deciseconds,
        Self::Centiseconds,
        Self::Milliseconds,
        Self::DaysHours,
        Self::DaysHoursMinutes,
        Self::DaysHoursMinutesSeconds,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HoursMinutes => "h:mm",
            Self::HoursMinutesSeconds => "h:mm:ss",
            Self::Deciseconds => "h:mm:ss.s",
            Self::Centiseconds => "h:mm:ss.ss",
            Self::Milliseconds => "h:mm:ss.sss",
            Self::DaysHours => "d h",
            Self::DaysHoursMinutes => "d h:mm",
            Self::DaysHoursMinutesSeconds => "d h:mm:ss",
        }
    }

    /// Smallest unit shown, in milliseconds
    fn precision_ms(&self) -> i64 {
        match self {
            Self::HoursMinutes | Self::DaysHoursMinutes => MS_PER_MINUTE,
            Self::HoursMinutesSeconds | Self::DaysHoursMinutesSeconds => MS_PER_SECOND,
            Self::Deciseconds => 100,
            Self::Centiseconds => 10,
            Self::Milliseconds => 1,
            Self::DaysHours => MS_PER_HOUR,
        }
    }

    /// Round `seconds` to the precision this format displays
    pub fn round(&self, seconds: f64) -> f64 {
        self.round_ms(seconds) as f64 / MS_PER_SECOND as f64
    }

    /// Rounded milliseconds, clamped to the largest multiple of the unit an `i64` holds
    fn round_ms(&self, seconds: f64) -> i64 {
        let unit = self.precision_ms();
        let max_units = i64::MAX / unit;
        let ms = (seconds * MS_PER_SECOND as f64).round();
        let units = ((ms / unit as f64).round() as i64).clamp(-max_units, max_units);
        units * unit
    }

    /// Render `seconds` in this format
    pub fn format(&self, seconds: f64) -> String {
        let rounded = self.round_ms(seconds);
        let sign = if rounded < 0 { "-" } else { "" };
        let ms = rounded.abs();

        let total_hours = ms / MS_PER_HOUR;
        let days = ms / MS_PER_DAY;
        let day_hours = (ms % MS_PER_DAY) / MS_PER_HOUR;
        let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
        let secs = (ms % MS_PER_MINUTE) / MS_PER_SECOND;
        let millis = ms % MS_PER_SECOND;

        let body = match self {
            Self::HoursMinutes => format!("{}:{:02}", total_hours, minutes),
            Self::HoursMinutesSeconds => format!("{}:{:02}:{:02}", total_hours, minutes, secs),
            Self::Deciseconds => format!(
                "{}:{:02}:{:02}.{}",
                total_hours,
                minutes,
                secs,
                millis / 100
            ),
            Self::Centiseconds => format!(
                "{}:{:02}:{:02}.{:02}",
                total_hours,
                minutes,
                secs,
                millis / 10
            ),
            Self::Milliseconds => {
                format!("{}:{:02}:{:02}.{:03}", total_hours, minutes, secs, millis)
            }
            Self::DaysHours => format!("{}d {}h", days, day_hours),
            Self::DaysHoursMinutes => format!("{}d {}:{:02}", days, day_hours, minutes),
            Self::DaysHoursMinutesSeconds => {
                format!("{}d {}:{:02}:{:02}", days, day_hours, minutes, secs)
            }
        };

        format!("{}{}", sign, body)
    }
}

impl fmt::Display for DurationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DurationFormat {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| PermissionError::parsing(format!("Invalid duration format: {}", s)))
    }
}
