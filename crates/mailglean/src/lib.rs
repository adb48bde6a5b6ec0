//! # mailglean
//!
//! Heuristic extraction of structured facts from free email text.
//!
//! Email clients keep re-deriving the same facts from message titles and
//! summaries: an event date for "add to calendar", a location for
//! reservation display, an attendee count for RSVP views, phone numbers for
//! contact saving. This crate consolidates those ad-hoc pattern cascades
//! into one shared module with four extractors:
//!
//! - **Event date/time**: an ordered cascade of pattern families (explicit
//!   month/day, relative keywords, weekday names) with a guaranteed
//!   fallback and a confidence tag naming which family matched.
//! - **Location**: a short phrase following a preposition/label cue.
//! - **Attendee count**: an integer near a count keyword.
//! - **Phone numbers**: all phone-shaped substrings, in order.
//!
//! Every extraction is a pure, synchronous function of the text and an
//! explicitly passed reference timestamp; nothing reads the system clock,
//! so results are deterministic and freely testable. Extraction never
//! fails: unparsable input degrades to documented defaults.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use mailglean::{extract_facts, DateConfidence};
//!
//! let reference = NaiveDate::from_ymd_opt(2024, 6, 1)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//!
//! let facts = extract_facts(
//!     "Dinner march 3rd at 123 Oak Street, Springfield. 12 people going",
//!     reference,
//! );
//!
//! // 2024-03-03 already passed, so the year rolls forward.
//! assert_eq!(facts.event_date.when.to_string(), "2025-03-03 09:00:00");
//! assert_eq!(facts.event_date.confidence, DateConfidence::Explicit);
//! assert_eq!(facts.location.as_deref(), Some("123 Oak Street, Springfield"));
//! assert_eq!(facts.attendee_count, 12);
//! ```
//!
//! Locale is fixed: English month and weekday names only.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod attendees;
mod date;
mod error;
mod facts;
mod location;
mod phone;

pub use attendees::extract_attendee_count;
pub use date::{DateConfidence, DateExtractor, ExtractedDate, extract_event_date};
pub use error::{Error, Result};
pub use facts::{MessageFacts, extract_facts};
pub use location::extract_location;
pub use phone::{PhoneMatch, extract_phone_numbers};
