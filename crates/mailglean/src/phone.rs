//! Phone number extraction.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Phone-shaped runs: digits with at most two separator characters
/// (space, hyphen, dot, parentheses) between any pair, optional leading `+`
/// or `(`. Digit-count plausibility is checked separately.
#[allow(clippy::unwrap_used)] // pattern is a compile-time constant
static PHONE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\(?\d(?:[\s().-]{0,2}\d){5,14}").unwrap());

/// Plausible digit counts for a phone number.
const DIGIT_RANGE: std::ops::RangeInclusive<usize> = 7..=15;

/// A phone-shaped substring found in free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneMatch {
    /// The matched substring exactly as it appeared.
    pub raw: String,
}

impl PhoneMatch {
    /// Returns the separator-stripped digit string, preserving a leading
    /// `+`. This is the form callers key contact records on.
    #[must_use]
    pub fn digits(&self) -> String {
        self.raw
            .chars()
            .enumerate()
            .filter(|&(i, c)| c.is_ascii_digit() || (i == 0 && c == '+'))
            .map(|(_, c)| c)
            .collect()
    }
}

/// Extracts all phone-shaped substrings from `text`, in order of
/// appearance. Returns an empty vector when none are found. Matches
/// embedded in longer digit runs (order IDs, tracking numbers) are
/// rejected.
#[must_use]
pub fn extract_phone_numbers(text: &str) -> Vec<PhoneMatch> {
    PHONE_SHAPE
        .find_iter(text)
        .filter(|m| {
            let digits = m.as_str().chars().filter(char::is_ascii_digit).count();
            DIGIT_RANGE.contains(&digits)
                && !boundary_is_digit(text, m.start().checked_sub(1))
                && !boundary_is_digit(text, Some(m.end()))
        })
        .map(|m| PhoneMatch {
            raw: m.as_str().to_string(),
        })
        .collect()
}

/// True when the byte at `idx` is an ASCII digit; used to reject matches
/// that are fragments of a longer digit run.
fn boundary_is_digit(text: &str, idx: Option<usize>) -> bool {
    idx.and_then(|i| text.as_bytes().get(i))
        .is_some_and(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raws(text: &str) -> Vec<String> {
        extract_phone_numbers(text)
            .into_iter()
            .map(|m| m.raw)
            .collect()
    }

    #[test]
    fn test_hyphenated_number() {
        assert_eq!(raws("call me at 555-123-4567 today"), vec!["555-123-4567"]);
    }

    #[test]
    fn test_parenthesized_area_code() {
        assert_eq!(raws("office: (415) 555-0134"), vec!["(415) 555-0134"]);
    }

    #[test]
    fn test_international_prefix() {
        let got = extract_phone_numbers("reach us on +44 20 7946 0958");
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].digits(), "+442079460958");
    }

    #[test]
    fn test_order_of_appearance() {
        let got = raws("home 555-1234, work 555-9876 or cell 555-2468");
        assert_eq!(got, vec!["555-1234", "555-9876", "555-2468"]);
    }

    #[test]
    fn test_no_numbers() {
        assert!(extract_phone_numbers("see you there").is_empty());
    }

    #[test]
    fn test_short_run_rejected() {
        // Six digits is below the plausibility floor.
        assert!(extract_phone_numbers("room 123456").is_empty());
    }

    #[test]
    fn test_long_digit_run_rejected() {
        // Tracking-number-sized runs are not phones.
        assert!(extract_phone_numbers("tracking 12345678901234567890").is_empty());
    }

    #[test]
    fn test_digits_strips_separators() {
        let m = PhoneMatch {
            raw: "(415) 555-0134".to_string(),
        };
        assert_eq!(m.digits(), "4155550134");
    }
}
