//! Explicit speaker-marker detection.
//!
//! Dubbing transcripts sometimes embed the speaker in the subtitle text
//! itself, in one of a handful of loosely standardized forms. The first
//! matching pattern wins and its captured number becomes the speaker id.

use regex::Regex;

/// Compiled marker patterns, tried in order against the start of a block's
/// text.
///
/// Recognized forms (case-insensitive, optional brackets):
/// - `speaker_1:` / `speaker 1:` / `[speaker 1]:`
/// - `S1:` / `[S1]:`
/// - `Person 1:` / `Voice 1:` / `Speaker 1:`
pub struct MarkerPatterns {
    patterns: Vec<Regex>,
}

impl MarkerPatterns {
    /// Compiles the marker patterns.
    pub fn new() -> Self {
        let patterns = vec![
            Regex::new(r"(?i)^\[?speaker[_\s]*(\d+)\]?[:\s]+(.+)$").unwrap(),
            Regex::new(r"(?i)^\[?S(\d+)\]?[:\s]+(.+)$").unwrap(),
            Regex::new(r"(?i)^(?:Person|Voice|Speaker)\s*(\d+)[:\s]+(.+)$").unwrap(),
        ];

        Self { patterns }
    }

    /// Extracts a leading speaker marker from block text.
    ///
    /// Returns the captured speaker number and the remaining text with the
    /// marker stripped. Without a marker the number is `None` and the text is
    /// returned trimmed.
    pub fn extract(&self, text: &str) -> (Option<u32>, String) {
        let text = text.trim();

        for pattern in &self.patterns {
            if let Some(captures) = pattern.captures(text) {
                if let Ok(number) = captures[1].parse::<u32>() {
                    return (Some(number), captures[2].trim().to_string());
                }
            }
        }

        (None, text.to_string())
    }
}

impl Default for MarkerPatterns {
    fn default() -> Self {
        Self::new()
    }
}
