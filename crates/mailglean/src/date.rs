//! Event date/time extraction.
//!
//! Parses a date/time intent out of free email text (title + summary) using
//! an ordered cascade of pattern families. The first family that matches
//! wins; unparsable text always falls back to a default, so extraction never
//! fails.
//!
//! Weekday arithmetic uses chrono's Monday = 0 indexing
//! ([`chrono::Weekday::num_days_from_monday`]).

use std::sync::LazyLock;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

#[allow(clippy::unwrap_used)] // patterns are compile-time constants
static MONTH_FULL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(january|february|march|april|may|june|july|august|september|october|november|december)\s+(\d{1,2})(?:st|nd|rd|th)?\b",
    )
    .unwrap()
});

#[allow(clippy::unwrap_used)] // patterns are compile-time constants
static MONTH_ABBR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\.?\s+(\d{1,2})(?:st|nd|rd|th)?\b")
        .unwrap()
});

#[allow(clippy::unwrap_used)] // patterns are compile-time constants
static IN_DAYS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bin\s+(\d+)\s+days?\b").unwrap());

#[allow(clippy::unwrap_used)] // patterns are compile-time constants
static WEEKDAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:(next)\s+)?(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b")
        .unwrap()
});

/// The cascade rule family that produced an extracted date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateConfidence {
    /// An explicit month/day was named in the text ("march 3rd").
    Explicit,
    /// A relative keyword matched ("tomorrow", "next week", "in 3 days").
    Relative,
    /// A weekday name matched ("monday", "next friday").
    Weekday,
    /// Nothing matched; the fallback default was used.
    Default,
}

/// A date/time extracted from free text, tagged with the rule that found it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDate {
    /// The extracted date/time, in the caller's local calendar.
    pub when: NaiveDateTime,
    /// Which cascade rule produced it.
    pub confidence: DateConfidence,
}

/// Extracts event dates from free text.
///
/// Holds the default time-of-day (09:00 unless overridden) applied to any
/// date inferred without an explicit time. Dates named by month/day or by
/// weekday normalize to the default time; relative keywords ("tomorrow",
/// "next week", "in N days") keep the reference's time-of-day, matching how
/// senders phrase intra-day timing.
#[derive(Debug, Clone, Copy)]
pub struct DateExtractor {
    default_hour: u32,
    default_minute: u32,
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DateExtractor {
    /// Default hour applied to dates inferred without an explicit time.
    pub const DEFAULT_HOUR: u32 = 9;
    /// Default minute applied to dates inferred without an explicit time.
    pub const DEFAULT_MINUTE: u32 = 0;

    /// Creates an extractor with the standard 09:00 default time.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_hour: Self::DEFAULT_HOUR,
            default_minute: Self::DEFAULT_MINUTE,
        }
    }

    /// Creates an extractor with a custom default time-of-day.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDefaultTime`] if `hour` is not 0-23 or
    /// `minute` is not 0-59.
    pub const fn with_default_time(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::InvalidDefaultTime { hour, minute });
        }
        Ok(Self {
            default_hour: hour,
            default_minute: minute,
        })
    }

    /// Extracts an event date from `text`, relative to `reference`.
    ///
    /// The cascade is evaluated in fixed priority order: explicit month/day
    /// (full then abbreviated names), "tomorrow", "next week", "in N days",
    /// weekday name, then the fallback of `reference` + 7 days at the
    /// default time. The first family that matches wins. Extraction never
    /// fails; malformed input degrades to the fallback.
    #[must_use]
    pub fn extract(&self, text: &str, reference: NaiveDateTime) -> ExtractedDate {
        let text = text.to_lowercase();

        if let Some(when) = self
            .month_day(&text, reference, &MONTH_FULL)
            .or_else(|| self.month_day(&text, reference, &MONTH_ABBR))
        {
            debug!(%when, "matched explicit month/day");
            return ExtractedDate {
                when,
                confidence: DateConfidence::Explicit,
            };
        }

        if let Some(when) = relative_days(&text, reference) {
            debug!(%when, "matched relative keyword");
            return ExtractedDate {
                when,
                confidence: DateConfidence::Relative,
            };
        }

        if let Some(when) = self.weekday(&text, reference) {
            debug!(%when, "matched weekday name");
            return ExtractedDate {
                when,
                confidence: DateConfidence::Weekday,
            };
        }

        debug!("no date pattern matched, using fallback");
        ExtractedDate {
            when: self.fallback(reference),
            confidence: DateConfidence::Default,
        }
    }

    /// Matches a month-name + day pattern and builds the date at the default
    /// time, rolling the year forward when the current-year date has already
    /// passed. An invalid day for the month is a pattern miss.
    fn month_day(&self, text: &str, reference: NaiveDateTime, re: &Regex) -> Option<NaiveDateTime> {
        let caps = re.captures(text)?;
        let month = month_number(caps.get(1)?.as_str())?;
        let day: u32 = caps.get(2)?.as_str().parse().ok()?;

        let this_year = NaiveDate::from_ymd_opt(reference.year(), month, day)?;
        let when = self.at_default_time(this_year)?;
        if when < reference {
            // Sender meant the next occurrence of that month/day.
            // Feb 29 may not exist next year; that is a miss too.
            let next_year = NaiveDate::from_ymd_opt(reference.year() + 1, month, day)?;
            return self.at_default_time(next_year);
        }
        Some(when)
    }

    /// Matches a weekday name, optionally prefixed with "next". The result
    /// always lands strictly after the reference day and normalizes to the
    /// default time.
    fn weekday(&self, text: &str, reference: NaiveDateTime) -> Option<NaiveDateTime> {
        let caps = WEEKDAY.captures(text)?;
        let target = weekday_number(caps.get(2)?.as_str())?;
        let current = i64::from(reference.weekday().num_days_from_monday());
        let explicit_next = caps.get(1).is_some();

        let mut days_ahead = i64::from(target) - current;
        if days_ahead <= 0 || explicit_next {
            days_ahead += 7;
        }
        let date = reference
            .date()
            .checked_add_days(Days::new(u64::try_from(days_ahead).ok()?))?;
        self.at_default_time(date)
    }

    fn fallback(&self, reference: NaiveDateTime) -> NaiveDateTime {
        let date = reference
            .date()
            .checked_add_days(Days::new(7))
            .unwrap_or_else(|| reference.date());
        self.at_default_time(date).unwrap_or(reference)
    }

    /// Hour/minute are validated at construction, so this only returns
    /// `None` at the extreme edge of chrono's date range.
    fn at_default_time(&self, date: NaiveDate) -> Option<NaiveDateTime> {
        date.and_hms_opt(self.default_hour, self.default_minute, 0)
    }
}

/// Extracts an event date with the default 09:00 configuration.
#[must_use]
pub fn extract_event_date(text: &str, reference: NaiveDateTime) -> ExtractedDate {
    DateExtractor::new().extract(text, reference)
}

/// The relative-keyword family: "tomorrow", "next week", "in N days".
/// All of these keep the reference's time-of-day.
fn relative_days(text: &str, reference: NaiveDateTime) -> Option<NaiveDateTime> {
    if text.contains("tomorrow") {
        return reference.checked_add_days(Days::new(1));
    }
    if text.contains("next week") {
        return reference.checked_add_days(Days::new(7));
    }
    let caps = IN_DAYS.captures(text)?;
    let n: u64 = caps.get(1)?.as_str().parse().ok()?;
    reference.checked_add_days(Days::new(n))
}

fn month_number(name: &str) -> Option<u32> {
    // Both pattern families funnel through the 3-letter prefix.
    match name.get(..3)? {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

/// Monday = 0 .. Sunday = 6, mirroring `Weekday::num_days_from_monday`.
fn weekday_number(name: &str) -> Option<u32> {
    match name {
        "monday" => Some(0),
        "tuesday" => Some(1),
        "wednesday" => Some(2),
        "thursday" => Some(3),
        "friday" => Some(4),
        "saturday" => Some(5),
        "sunday" => Some(6),
        _ => None,
    }
}
