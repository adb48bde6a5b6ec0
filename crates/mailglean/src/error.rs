//! Error types for extractor configuration.

/// Result type alias for extractor configuration.
pub type Result<T> = std::result::Result<T, Error>;

/// Extractor configuration errors.
///
/// Extraction itself is total and never fails; the only fallible operation
/// in the crate is constructing an extractor with an out-of-range default
/// clock.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Default time-of-day is not a valid wall-clock value.
    #[error("invalid default time {hour:02}:{minute:02} (expected hour 0-23, minute 0-59)")]
    InvalidDefaultTime {
        /// The rejected hour.
        hour: u32,
        /// The rejected minute.
        minute: u32,
    },
}
