//! Transcript parsing errors

use thiserror::Error;

/// Errors from transcript parsing.
///
/// These surface from timestamp and timing-line parsing. The block tokenizer
/// catches them and drops the offending block, so they never escape
/// [`crate::parse`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranscriptError {
    /// Timestamp does not follow HH:MM:SS,mmm
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Timing line does not contain a timestamp range
    #[error("invalid timing line: {0}")]
    InvalidTiming(String),

    /// End time is not after start time
    #[error("inverted time span: {start} >= {end}")]
    InvertedSpan { start: f64, end: f64 },
}
