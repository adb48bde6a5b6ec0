//! Location extraction.
//!
//! Finds a short free-text location phrase following one of a fixed set of
//! preposition/label cues. Plain string scanning is enough here; the cues
//! are literal and the candidate is bounded by the first sentence
//! terminator.

use tracing::debug;

/// Cues that introduce a location, in priority order.
const CUES: [&str; 4] = ["at ", "located at ", "address: ", "location: "];

/// Minimum accepted candidate length; filters noise like "at 9".
const MIN_LEN: usize = 6;

/// Extracts a location phrase from `text`.
///
/// For each cue in priority order, the substring after the first
/// case-insensitive occurrence is taken up to the first `.`, reduced to its
/// first two comma-separated segments, and trimmed. The first cue whose
/// candidate is longer than five characters wins. Returns `None` when no
/// cue yields an acceptable candidate; never returns an empty string.
#[must_use]
pub fn extract_location(text: &str) -> Option<String> {
    for cue in CUES {
        let Some(start) = find_ignore_ascii_case(text, cue) else {
            continue;
        };
        let rest = &text[start + cue.len()..];
        let sentence = rest.split('.').next().unwrap_or(rest);
        let candidate = sentence
            .split(',')
            .take(2)
            .collect::<Vec<_>>()
            .join(",")
            .trim()
            .to_string();
        if candidate.chars().count() >= MIN_LEN {
            debug!(cue, %candidate, "location cue matched");
            return Some(candidate);
        }
    }
    None
}

/// Byte offset of the first occurrence of `needle` in `haystack`, comparing
/// ASCII case-insensitively. Operates on the original string so the caller
/// can slice it without lowercase re-mapping shifting byte offsets.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || h.len() < n.len() {
        return None;
    }
    (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}
