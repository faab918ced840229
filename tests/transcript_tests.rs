//! Integration tests for transcript parsing and speaker attribution.
//!
//! These tests verify the public API against the behaviors the editing UI
//! depends on: block tokenization, marker precedence, the timing heuristic,
//! and round-trip rendering.

use dubstudio_transcript::{parse, parse_with_config, AttributionConfig, Transcript};

fn speaker_ids(transcript: &Transcript) -> Vec<&str> {
    transcript
        .segments
        .iter()
        .map(|s| s.speaker_id.as_str())
        .collect()
}

// ============================================================================
// Tokenization
// ============================================================================

#[test]
fn test_segment_count_matches_well_formed_blocks() {
    let srt = "1\n00:00:01,000 --> 00:00:02,000\nOne\n\n\
               2\n00:00:03,000 --> 00:00:04,000\nTwo\n\n\
               3\n00:00:05,000 --> 00:00:06,000\nThree\n";

    let transcript = parse(srt);
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript.segments[0].text, "One");
    assert_eq!(transcript.segments[2].text, "Three");
}

#[test]
fn test_malformed_block_between_valid_blocks_is_dropped() {
    // The middle block has only two lines and must be skipped silently.
    let srt = "1\n00:00:01,000 --> 00:00:02,000\nFirst\n\n\
               2\n00:00:03,000\n\n\
               3\n00:00:05,000 --> 00:00:06,000\nLast\n";

    let transcript = parse(srt);
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript.segments[0].text, "First");
    assert_eq!(transcript.segments[1].text, "Last");
}

#[test]
fn test_empty_input_yields_empty_transcript() {
    let transcript = parse("");
    assert!(transcript.is_empty());
    assert!(transcript.speakers().is_empty());
}

#[test]
fn test_source_order_is_preserved() {
    // Blocks out of time order stay in source order; callers sort separately.
    let srt = "1\n00:00:10,000 --> 00:00:12,000\nLater\n\n\
               2\n00:00:01,000 --> 00:00:02,000\nEarlier\n";

    let transcript = parse(srt);
    assert_eq!(transcript.segments[0].text, "Later");
    assert_eq!(transcript.segments[1].text, "Earlier");
}

#[test]
fn test_end_after_start_for_every_segment() {
    let srt = "1\n00:00:01,000 --> 00:00:02,000\nGood\n\n\
               2\n00:00:05,000 --> 00:00:03,000\nBackwards, dropped\n\n\
               3\n00:00:06,000 --> 00:00:07,000\nGood again\n";

    let transcript = parse(srt);
    assert_eq!(transcript.len(), 2);
    assert!(transcript.segments.iter().all(|s| s.end > s.start));
}

// ============================================================================
// Speaker markers
// ============================================================================

#[test]
fn test_all_marked_blocks_keep_their_numbers() {
    // With a marker on every block, timing must be irrelevant.
    let srt = "1\n00:00:00,000 --> 00:00:01,000\nSpeaker 3: First\n\n\
               2\n00:00:01,000 --> 00:00:02,000\nSpeaker 1: Second\n\n\
               3\n00:00:20,000 --> 00:00:21,000\nSpeaker 2: Third\n";

    let transcript = parse(srt);
    assert_eq!(
        speaker_ids(&transcript),
        vec!["speaker_3", "speaker_1", "speaker_2"]
    );
}

#[test]
fn test_unmarked_blocks_inherit_nearest_preceding_marker() {
    let srt = "1\n00:00:00,000 --> 00:00:01,000\n[Speaker 2]: Hi\n\n\
               2\n00:00:01,500 --> 00:00:02,000\nNo marker here\n";

    let transcript = parse(srt);
    assert_eq!(speaker_ids(&transcript), vec!["speaker_2", "speaker_2"]);
    assert_eq!(transcript.segments[0].text, "Hi");
    assert_eq!(transcript.segments[1].text, "No marker here");
}

#[test]
fn test_marker_stripped_from_text() {
    let srt = "1\n00:00:00,000 --> 00:00:01,000\nspeaker_1: The marker is gone\n";

    let transcript = parse(srt);
    assert_eq!(transcript.segments[0].text, "The marker is gone");
    assert!(!transcript.segments[0].text.contains("speaker_1"));
}

// ============================================================================
// Timing heuristic
// ============================================================================

#[test]
fn test_significant_gap_toggles_speaker() {
    let srt = "1\n00:00:00,000 --> 00:00:02,000\nHello there.\n\n\
               2\n00:00:02,100 --> 00:00:04,000\nHow are you?\n\n\
               3\n00:00:06,500 --> 00:00:08,000\nI'm fine, thanks!\n";

    let transcript = parse(srt);
    assert_eq!(transcript.len(), 3);
    assert_eq!(
        speaker_ids(&transcript),
        vec!["speaker_1", "speaker_1", "speaker_2"]
    );
}

#[test]
fn test_small_gaps_stay_on_one_speaker() {
    let srt = "1\n00:00:00,000 --> 00:00:02,000\nOne narrator.\n\n\
               2\n00:00:02,200 --> 00:00:04,000\nKeeps going.\n\n\
               3\n00:00:04,300 --> 00:00:06,000\nAnd going.\n\n\
               4\n00:00:06,200 --> 00:00:08,000\nStill going.\n";

    let transcript = parse(srt);
    assert!(transcript
        .segments
        .iter()
        .all(|s| s.speaker_id == "speaker_1"));
}

#[test]
fn test_contiguous_subtitles_never_switch() {
    let srt = "1\n00:00:00,000 --> 00:00:02,000\nBack\n\n\
               2\n00:00:02,000 --> 00:00:04,000\nto\n\n\
               3\n00:00:04,000 --> 00:00:06,000\nback\n";

    let transcript = parse(srt);
    assert!(transcript
        .segments
        .iter()
        .all(|s| s.speaker_id == "speaker_1"));
}

#[test]
fn test_custom_thresholds_suppress_switch() {
    let srt = "1\n00:00:00,000 --> 00:00:02,000\nHello there.\n\n\
               2\n00:00:02,100 --> 00:00:04,000\nStill me.\n\n\
               3\n00:00:06,500 --> 00:00:08,000\nAnd still me.\n";

    let config = AttributionConfig {
        switch_gap: 10.0,
        gap_ratio: 1.5,
        question_gap: 0.2,
    };

    let transcript = parse_with_config(srt, &config);
    assert!(transcript
        .segments
        .iter()
        .all(|s| s.speaker_id == "speaker_1"));
}

// ============================================================================
// Rendering and round trips
// ============================================================================

#[test]
fn test_reparsing_rendered_output_is_stable() {
    let srt = "1\n00:00:00,000 --> 00:00:02,000\nHello there.\n\n\
               2\n00:00:02,100 --> 00:00:04,000\nHow are you?\n\n\
               3\n00:00:06,500 --> 00:00:08,000\nI'm fine, thanks!\n";

    let first = parse(srt);
    let second = parse(&first.to_srt());

    assert_eq!(first, second);

    // And once more for good measure: rendering is a fixed point.
    let third = parse(&second.to_srt());
    assert_eq!(second, third);
}

#[test]
fn test_rendered_output_carries_markers() {
    let srt = "1\n00:00:00,000 --> 00:00:01,000\n[Speaker 2]: Hi\n";

    let rendered = parse(srt).to_srt();
    assert!(rendered.contains("speaker_2: Hi"));
    assert!(rendered.contains("00:00:00,000 --> 00:00:01,000"));
}

#[test]
fn test_json_export_shape() {
    let srt = "1\n00:00:00,000 --> 00:00:02,000\nHello.\n";

    let json = parse(srt).to_json();
    assert!(json.contains("\"segments\""));
    assert!(json.contains("\"speaker_id\": \"speaker_1\""));
}

// ============================================================================
// Speaker roster
// ============================================================================

#[test]
fn test_roster_for_two_speaker_dialogue() {
    let srt = "1\n00:00:00,000 --> 00:00:02,000\nHello there.\n\n\
               2\n00:00:02,100 --> 00:00:04,000\nHow are you?\n\n\
               3\n00:00:06,500 --> 00:00:08,000\nI'm fine, thanks!\n";

    let speakers = parse(srt).speakers();
    assert_eq!(speakers.len(), 2);
    assert_eq!(speakers[0].id, "speaker_1");
    assert_eq!(speakers[0].name, "Speaker 1");
    assert_eq!(speakers[1].id, "speaker_2");
    assert_ne!(speakers[0].color, speakers[1].color);
}
