//! Attendee count extraction.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Count patterns in priority order; group 1 captures the integer.
#[allow(clippy::unwrap_used)] // patterns are compile-time constants
static COUNT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)(\d+)\s+(?:people|person|attendees)").unwrap(),
        Regex::new(r"(?i)(\d+)\s+(?:going|attending)").unwrap(),
    ]
});

/// Extracts an attendee count from `text`.
///
/// Patterns are tried in priority order; the first captured integer wins.
/// Returns 0 when nothing matches. A captured number too large for `u32`
/// counts as a miss for that pattern.
#[must_use]
pub fn extract_attendee_count(text: &str) -> u32 {
    for re in COUNT_PATTERNS.iter() {
        if let Some(n) = re
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
        {
            debug!(count = n, "attendee pattern matched");
            return n;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_people_keyword() {
        assert_eq!(extract_attendee_count("12 people are attending"), 12);
    }

    #[test]
    fn test_attendees_keyword() {
        assert_eq!(extract_attendee_count("expecting 40 attendees this year"), 40);
    }

    #[test]
    fn test_going_keyword() {
        assert_eq!(extract_attendee_count("8 going so far"), 8);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(extract_attendee_count("3 People confirmed"), 3);
    }

    #[test]
    fn test_no_match_defaults_to_zero() {
        assert_eq!(extract_attendee_count("no numbers"), 0);
    }

    #[test]
    fn test_number_without_keyword_ignored() {
        assert_eq!(extract_attendee_count("room 12 on floor 3"), 0);
    }

    #[test]
    fn test_overflow_is_a_miss() {
        assert_eq!(extract_attendee_count("99999999999 people"), 0);
    }
}
