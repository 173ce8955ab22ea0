use std::fmt::Display;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDateTime, TimeZone};
use thiserror::Error;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Naive timestamp layouts accepted besides RFC 3339.
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("'{input}' is not a recognised date")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("'{input}' does not exist in the local time zone")]
    NonexistentLocalTime { input: String },

    #[error("'{pattern}' is not a valid strftime pattern")]
    InvalidPattern { pattern: String },
}

/// Human-readable size in base 1024, e.g. `1536 -> "1.5 KB"`.
///
/// Values are rounded to two decimals with trailing zeros dropped. Anything
/// past a gigabyte is still shown in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut unit = 0;
    while unit < SIZE_UNITS.len() - 1 && bytes >= 1u64 << (10 * (unit + 1)) {
        unit += 1;
    }
    let value = bytes as f64 / (1u64 << (10 * unit)) as f64;
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded} {}", SIZE_UNITS[unit])
}

/// strftime patterns used by [`format_date`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    time: String,
    date: String,
}

impl Default for DateFormat {
    fn default() -> Self {
        Self {
            time: "%H:%M".to_string(),
            date: "%m/%d/%Y".to_string(),
        }
    }
}

/// True when chrono can render `pattern` without failing.
pub(crate) fn is_valid_pattern(pattern: &str) -> bool {
    !pattern.is_empty() && !StrftimeItems::new(pattern).any(|item| item == Item::Error)
}

impl DateFormat {
    /// Build from a time-of-day and a full-date pattern. Both must be
    /// non-empty and parse as strftime.
    pub fn new(time: impl Into<String>, date: impl Into<String>) -> Result<Self, FormatError> {
        let (time, date) = (time.into(), date.into());
        for pattern in [&time, &date] {
            if !is_valid_pattern(pattern) {
                return Err(FormatError::InvalidPattern {
                    pattern: pattern.clone(),
                });
            }
        }
        Ok(Self { time, date })
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Describe `date` relative to `now`.
    ///
    /// Whole days elapsed decide the form: `Today HH:MM`, `Yesterday HH:MM`,
    /// `N days ago` up to six days, then the plain date. Dates after `now`
    /// use the plain date.
    pub fn format<Tz>(&self, date: &DateTime<Tz>, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let elapsed = now.clone().signed_duration_since(date.clone());
        let days = elapsed.num_milliseconds().div_euclid(86_400_000);
        match days {
            0 => format!("Today {}", date.format(&self.time)),
            1 => format!("Yesterday {}", date.format(&self.time)),
            2..=6 => format!("{days} days ago"),
            _ => date.format(&self.date).to_string(),
        }
    }
}

/// [`DateFormat::format`] with the default patterns.
pub fn format_date<Tz>(date: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    DateFormat::default().format(date, now)
}

/// Parse an RFC 3339 timestamp, or a naive `YYYY-MM-DD HH:MM:SS` one read
/// as wall-clock time in `tz`.
pub fn parse_date<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<DateTime<Tz>, FormatError> {
    let input = input.trim();
    let rfc3339_err = match DateTime::parse_from_rfc3339(input) {
        Ok(date) => return Ok(date.with_timezone(tz)),
        Err(err) => err,
    };

    let naive = NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(input, layout).ok())
        .ok_or_else(|| FormatError::InvalidDate {
            input: input.to_string(),
            source: rfc3339_err,
        })?;

    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| FormatError::NonexistentLocalTime {
            input: input.to_string(),
        })
}

/// Parse `input` in `now`'s time zone and format it relative to `now`.
pub fn format_date_str<Tz>(input: &str, now: &DateTime<Tz>) -> Result<String, FormatError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let date = parse_date(input, &now.timezone())?;
    Ok(format_date(&date, now))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_size_units() {
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024 * 1024), "5120 GB");
    }
}
