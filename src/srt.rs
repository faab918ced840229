//! SRT (SubRip) block tokenizer and writer.
//!
//! The tokenizer splits raw subtitle text into blocks and extracts timed text
//! spans. Dubbing transcripts arrive with stray formatting artifacts, so
//! malformed blocks are dropped rather than surfaced as errors: the tokenizer
//! is total over all string inputs.

use crate::error::TranscriptError;
use crate::types::Transcript;
use crate::Result;
use regex::Regex;
use tracing::trace;

/// A raw subtitle block before speaker attribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds, always greater than `start`.
    pub end: f64,
    /// Text lines joined with single spaces, speaker marker still embedded.
    pub text: String,
}

/// Splits subtitle text into timed blocks.
///
/// A block is accepted when it has at least three non-empty lines and its
/// second line contains a `HH:MM:SS,mmm --> HH:MM:SS,mmm` range. Anything
/// else is skipped. Empty input yields an empty vector.
pub fn tokenize(content: &str) -> Vec<Block> {
    let timing_pattern =
        Regex::new(r"(\d{2}:\d{2}:\d{2}[,.]\d{3})\s*-->\s*(\d{2}:\d{2}:\d{2}[,.]\d{3})").unwrap();

    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    let mut blocks = Vec::new();

    for raw in normalized.split("\n\n") {
        let lines: Vec<&str> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() < 3 {
            if !lines.is_empty() {
                trace!("skipping block with {} line(s)", lines.len());
            }
            continue;
        }

        // Line 1 is the subtitle number, line 2 the timing, the rest is text.
        match parse_timing_line(lines[1], &timing_pattern) {
            Ok((start, end)) => {
                let text = lines[2..].join(" ");
                blocks.push(Block { start, end, text });
            }
            Err(err) => trace!("skipping block: {}", err),
        }
    }

    blocks
}

/// Parses a timing line containing a timestamp range.
///
/// Trailing annotations after the end timestamp (some sources append position
/// info) are tolerated.
fn parse_timing_line(line: &str, timing_pattern: &Regex) -> Result<(f64, f64)> {
    let captures = timing_pattern
        .captures(line)
        .ok_or_else(|| TranscriptError::InvalidTiming(line.to_string()))?;

    let start = parse_timestamp(&captures[1])?;
    let end = parse_timestamp(&captures[2])?;

    if end <= start {
        return Err(TranscriptError::InvertedSpan { start, end });
    }

    Ok((start, end))
}

/// Parses an SRT timestamp into seconds.
///
/// Both `00:01:02,500` and `00:01:02.500` are accepted.
pub fn parse_timestamp(timestamp: &str) -> Result<f64> {
    let normalized = timestamp.trim().replace(',', ".");
    let parts: Vec<&str> = normalized.split(':').collect();

    if parts.len() != 3 {
        return Err(TranscriptError::InvalidTimestamp(timestamp.to_string()));
    }

    let hours: f64 = parts[0]
        .parse()
        .map_err(|_| TranscriptError::InvalidTimestamp(timestamp.to_string()))?;
    let minutes: f64 = parts[1]
        .parse()
        .map_err(|_| TranscriptError::InvalidTimestamp(timestamp.to_string()))?;
    let seconds: f64 = parts[2]
        .parse()
        .map_err(|_| TranscriptError::InvalidTimestamp(timestamp.to_string()))?;

    Ok(hours * 3600.0 + minutes * 60.0 + seconds)
}

/// Formats seconds as an SRT timestamp (HH:MM:SS,mmm).
pub fn format_timestamp(seconds: f64) -> String {
    let total_millis = (seconds * 1000.0).round() as u64;
    let hours = total_millis / 3_600_000;
    let minutes = (total_millis % 3_600_000) / 60_000;
    let secs = (total_millis % 60_000) / 1000;
    let millis = total_millis % 1000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

/// Writes a transcript back to SRT with explicit speaker markers.
///
/// Each text line is prefixed with `speaker_<n>:`, so re-parsing the output
/// resolves every segment through the marker path and reproduces the same
/// speaker assignment.
pub fn write(transcript: &Transcript) -> String {
    let mut output = String::new();

    for (index, segment) in transcript.segments.iter().enumerate() {
        output.push_str(&format!("{}\n", index + 1));
        output.push_str(&format!(
            "{} --> {}\n",
            format_timestamp(segment.start),
            format_timestamp(segment.end)
        ));
        output.push_str(&format!("{}: {}\n", segment.speaker_id, segment.text));
        output.push('\n');
    }

    output
}
