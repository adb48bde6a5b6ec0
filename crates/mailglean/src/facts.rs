//! Combined extraction over a single block of text.
//!
//! The email-client flows that consume this crate (calendar-event creation,
//! RSVP, reservation display, contact save) all run several extractors over
//! the same concatenated title + summary text. `MessageFacts` bundles one
//! pass over all four.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::attendees::extract_attendee_count;
use crate::date::{DateExtractor, ExtractedDate};
use crate::location::extract_location;
use crate::phone::{PhoneMatch, extract_phone_numbers};

/// Structured facts extracted from one block of free email text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageFacts {
    /// Best-effort event date; always present (falls back to a default).
    pub event_date: ExtractedDate,
    /// Location phrase, when a cue matched. Never `Some("")`.
    pub location: Option<String>,
    /// Attendee count; 0 when no count pattern matched.
    pub attendee_count: u32,
    /// Phone-shaped substrings in order of appearance.
    pub phone_numbers: Vec<PhoneMatch>,
}

impl MessageFacts {
    /// Runs all four extractors with the default date configuration.
    #[must_use]
    pub fn extract(text: &str, reference: NaiveDateTime) -> Self {
        Self::extract_with(&DateExtractor::new(), text, reference)
    }

    /// Runs all four extractors using the given date configuration.
    #[must_use]
    pub fn extract_with(dates: &DateExtractor, text: &str, reference: NaiveDateTime) -> Self {
        Self {
            event_date: dates.extract(text, reference),
            location: extract_location(text),
            attendee_count: extract_attendee_count(text),
            phone_numbers: extract_phone_numbers(text),
        }
    }
}

/// Extracts all facts from `text` with the default date configuration.
#[must_use]
pub fn extract_facts(text: &str, reference: NaiveDateTime) -> MessageFacts {
    MessageFacts::extract(text, reference)
}
