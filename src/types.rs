//! Core transcript types.
//!
//! This module defines the segment and transcript structures produced by the
//! parser, plus the speaker roster derived for the editing UI.

use serde::{Deserialize, Serialize};

/// A timed span of transcript text with an assigned speaker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start time in seconds from the beginning of the media.
    pub start: f64,
    /// End time in seconds, always greater than `start`.
    pub end: f64,
    /// Utterance text with any leading speaker marker stripped.
    pub text: String,
    /// Speaker identifier in `speaker_<n>` form.
    pub speaker_id: String,
}

impl Segment {
    /// Returns the duration of the segment in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// An ordered, speaker-tagged transcript.
///
/// Segments keep the order of their source blocks; the parser does not
/// re-sort by time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// All segments, in source order.
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the transcript has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the end time of the last segment, or 0.0 for an empty
    /// transcript.
    pub fn duration(&self) -> f64 {
        self.segments.last().map(|s| s.end).unwrap_or(0.0)
    }

    /// Builds the speaker roster: distinct speaker ids in first-appearance
    /// order, with display names and UI colors assigned round-robin from
    /// [`SPEAKER_COLORS`].
    pub fn speakers(&self) -> Vec<Speaker> {
        let mut speakers: Vec<Speaker> = Vec::new();
        for segment in &self.segments {
            if !speakers.iter().any(|s| s.id == segment.speaker_id) {
                let color = SPEAKER_COLORS[speakers.len() % SPEAKER_COLORS.len()];
                speakers.push(Speaker {
                    id: segment.speaker_id.clone(),
                    name: display_name(&segment.speaker_id),
                    color,
                });
            }
        }
        speakers
    }

    /// Renders the transcript back to SRT with explicit speaker markers.
    pub fn to_srt(&self) -> String {
        crate::srt::write(self)
    }

    /// Serializes the transcript to pretty-printed JSON.
    ///
    /// The shape is `{ "segments": [...] }`, which is what the editing UI
    /// consumes.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// A speaker entry for the editing UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Speaker {
    /// Speaker identifier in `speaker_<n>` form.
    pub id: String,
    /// Display name, e.g. "Speaker 2".
    pub name: String,
    /// UI color as a hex string.
    pub color: &'static str,
}

/// Color palette for speaker tracks in the editing UI.
pub const SPEAKER_COLORS: [&str; 8] = [
    "#f472b6", // Pink
    "#60a5fa", // Blue
    "#34d399", // Green
    "#fbbf24", // Yellow
    "#a78bfa", // Purple
    "#fb7185", // Rose
    "#38bdf8", // Sky
    "#4ade80", // Emerald
];

/// Derives a display name from a speaker id: `speaker_2` becomes "Speaker 2".
/// Ids not in `speaker_<n>` form are used verbatim.
fn display_name(speaker_id: &str) -> String {
    match speaker_id.strip_prefix("speaker_") {
        Some(number) => format!("Speaker {}", number),
        None => speaker_id.to_string(),
    }
}
