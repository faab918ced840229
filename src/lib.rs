//! # dubstudio-transcript
//!
//! Transcript parsing and speaker attribution for dubbing projects.
//!
//! Dubbing APIs return transcripts as SRT text without reliable speaker
//! information. This crate turns that text into structured, speaker-tagged
//! segments for an editing UI:
//!
//! - Tokenize SRT blocks into timed text spans, dropping malformed blocks
//! - Detect explicit speaker markers embedded in subtitle text
//! - Attribute speakers to unmarked transcripts with a timing-gap heuristic
//! - Render transcripts back to SRT or JSON
//!
//! Parsing is a pure function of its input: no I/O, no shared state, safe to
//! call concurrently on independent transcripts.
//!
//! ## Quick Start
//!
//! ```rust
//! let srt = "1\n00:00:00,000 --> 00:00:02,000\nHello there.\n\n\
//!            2\n00:00:02,100 --> 00:00:04,000\nStill the narrator.\n";
//!
//! let transcript = dubstudio_transcript::parse(srt);
//! assert_eq!(transcript.segments.len(), 2);
//! assert_eq!(transcript.segments[0].speaker_id, "speaker_1");
//! ```
//!
//! ## Explicit markers
//!
//! When any block carries a marker such as `[Speaker 2]:`, markers win and
//! the timing heuristic never runs:
//!
//! ```rust
//! let srt = "1\n00:00:00,000 --> 00:00:01,000\n[Speaker 2]: Hi\n";
//!
//! let transcript = dubstudio_transcript::parse(srt);
//! assert_eq!(transcript.segments[0].speaker_id, "speaker_2");
//! assert_eq!(transcript.segments[0].text, "Hi");
//! ```

pub mod error;
pub mod marker;
pub mod speaker;
pub mod srt;
pub mod types;

pub use error::TranscriptError;
pub use speaker::AttributionConfig;
pub use types::{Segment, Speaker, Transcript, SPEAKER_COLORS};

/// Result type for transcript operations.
pub type Result<T> = std::result::Result<T, TranscriptError>;

/// Parses SRT transcript text into speaker-tagged segments.
///
/// Malformed blocks are dropped, empty input yields an empty transcript, and
/// every returned segment has a speaker id. This function does not fail.
pub fn parse(content: &str) -> Transcript {
    parse_with_config(content, &AttributionConfig::default())
}

/// Parses with explicit attribution thresholds.
pub fn parse_with_config(content: &str, config: &AttributionConfig) -> Transcript {
    let blocks = srt::tokenize(content);
    let segments = speaker::assign(blocks, config);
    Transcript { segments }
}
