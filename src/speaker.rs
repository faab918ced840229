//! Speaker attribution over tokenized subtitle blocks.
//!
//! The transcript is classified once: if any block carries an explicit
//! marker, assignment trusts the markers and fills the gaps between them.
//! Otherwise a conservative timing heuristic runs, biased toward keeping a
//! single main speaker. Over-splitting speakers is worse than under-splitting
//! for dubbing projects, which typically have one dominant narrator.

use std::collections::BTreeMap;

use tracing::debug;

use crate::marker::MarkerPatterns;
use crate::srt::Block;
use crate::types::Segment;

/// Thresholds for the timing-gap attribution heuristic.
#[derive(Debug, Clone)]
pub struct AttributionConfig {
    /// Minimum absolute gap in seconds for a speaker switch.
    pub switch_gap: f64,
    /// A switching gap must also exceed the average positive gap times this
    /// factor.
    pub gap_ratio: f64,
    /// Minimum gap in seconds for the question-response switch.
    pub question_gap: f64,
}

impl Default for AttributionConfig {
    fn default() -> Self {
        Self {
            switch_gap: 0.5,
            gap_ratio: 1.5,
            question_gap: 0.2,
        }
    }
}

/// A block with its marker resolution, before assignment.
struct Cue {
    start: f64,
    end: f64,
    text: String,
    marker: Option<u32>,
}

/// Assigns a speaker id to every block.
///
/// Marker extraction runs first; the transcript then takes exactly one of two
/// paths depending on whether any marker was found. Every returned segment
/// has a non-empty speaker id.
pub fn assign(blocks: Vec<Block>, config: &AttributionConfig) -> Vec<Segment> {
    let patterns = MarkerPatterns::new();

    let cues: Vec<Cue> = blocks
        .into_iter()
        .map(|block| {
            let (marker, text) = patterns.extract(&block.text);
            Cue {
                start: block.start,
                end: block.end,
                text,
                marker,
            }
        })
        .collect();

    let segments = if cues.iter().any(|cue| cue.marker.is_some()) {
        debug!("using explicit speaker markers");
        assign_from_markers(cues)
    } else {
        debug!("no speaker markers found, using timing heuristic");
        assign_from_timing(cues, config)
    };

    let mut distribution: BTreeMap<&str, usize> = BTreeMap::new();
    for segment in &segments {
        *distribution.entry(segment.speaker_id.as_str()).or_insert(0) += 1;
    }
    debug!("speaker distribution: {:?}", distribution);

    segments
}

/// Marked path: explicit markers win, unmarked blocks inherit the nearest
/// preceding marked speaker. Blocks before the first marker default to
/// speaker 1.
fn assign_from_markers(cues: Vec<Cue>) -> Vec<Segment> {
    let mut last_speaker = 1;

    cues.into_iter()
        .map(|cue| {
            if let Some(number) = cue.marker {
                last_speaker = number;
            }
            Segment {
                start: cue.start,
                end: cue.end,
                text: cue.text,
                speaker_id: speaker_id(last_speaker),
            }
        })
        .collect()
}

/// Unmarked path: a single forward pass toggling between speakers 1 and 2.
///
/// A switch needs a gap that is large both absolutely and relative to the
/// transcript's average positive gap, so natural pauses within one speaker's
/// narration do not split it. A question followed by even a short pause also
/// switches, since that shape suggests a different respondent.
fn assign_from_timing(cues: Vec<Cue>, config: &AttributionConfig) -> Vec<Segment> {
    let gaps: Vec<f64> = cues
        .windows(2)
        .map(|pair| pair[1].start - pair[0].end)
        .collect();

    let positive: Vec<f64> = gaps.iter().copied().filter(|gap| *gap > 0.0).collect();
    let average_gap = if positive.is_empty() {
        0.0
    } else {
        positive.iter().sum::<f64>() / positive.len() as f64
    };
    let max_gap = positive.iter().copied().fold(0.0_f64, f64::max);
    debug!(
        "average gap {:.2}s, max gap {:.2}s over {} segment(s)",
        average_gap,
        max_gap,
        cues.len()
    );

    let mut current: u32 = 1;
    let mut segments: Vec<Segment> = Vec::with_capacity(cues.len());

    for (i, cue) in cues.into_iter().enumerate() {
        if i > 0 {
            let gap = gaps[i - 1];
            let wide_gap = gap > config.switch_gap && gap > average_gap * config.gap_ratio;
            let question_before = segments
                .last()
                .is_some_and(|prev| prev.text.ends_with('?'))
                && gap > config.question_gap;

            if wide_gap {
                current = toggle(current);
                debug!("segment {}: significant gap {:.2}s triggers switch", i, gap);
            } else if question_before {
                current = toggle(current);
                debug!("segment {}: question then {:.2}s gap triggers switch", i, gap);
            }
        }

        segments.push(Segment {
            start: cue.start,
            end: cue.end,
            text: cue.text,
            speaker_id: speaker_id(current),
        });
    }

    segments
}

fn toggle(speaker: u32) -> u32 {
    if speaker == 1 {
        2
    } else {
        1
    }
}

fn speaker_id(number: u32) -> String {
    format!("speaker_{}", number)
}
