//! # Time Utilities
//!
//! Conversions for contract timestamps using chrono.

use chrono::{DateTime, Utc};

/// Convert whole seconds since the Unix epoch to a UTC instant.
pub fn from_unix_seconds(seconds: u64) -> Result<DateTime<Utc>, Error> {
    i64::try_from(seconds)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .ok_or(Error::OutOfRange(seconds))
}

/// Format time as RFC3339 string.
pub fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339()
}

/// Format time for display next to a wave.
pub fn format_display(time: DateTime<Utc>) -> String {
    time.format("%a %b %d %Y %H:%M:%S UTC").to_string()
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    OutOfRange(u64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
