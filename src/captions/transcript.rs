use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::captions::CaptionEntry;

// @module: Timed-text payload parsing

// @const: Single timed-text element; the text never spans markup
static TIMED_TEXT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<text start="([\d.]+)" dur="([\d.]+)">([^<]*)</text>"#).unwrap()
});

/// Turns a transcript payload into caption entries
pub trait TranscriptParser: Send + Sync {
    /// Parse every cue in the payload, attributing entries to `lang`.
    /// Text is returned verbatim; an empty result is a track without cues.
    fn parse(&self, payload: &str, lang: &str) -> Vec<CaptionEntry>;
}

/// Scans the payload with a regular expression instead of an XML parser
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexTranscriptParser;

impl TranscriptParser for RegexTranscriptParser {
    fn parse(&self, payload: &str, lang: &str) -> Vec<CaptionEntry> {
        TIMED_TEXT_REGEX
            .captures_iter(payload)
            .filter_map(|caps| {
                if caps[3].is_empty() {
                    debug!("Skipping empty cue at start={}", &caps[1]);
                    return None;
                }
                let start = caps[1].parse::<f64>();
                let duration = caps[2].parse::<f64>();
                match (start, duration) {
                    (Ok(start), Ok(duration)) => Some(CaptionEntry::timed(&caps[3], start, duration, lang)),
                    _ => {
                        debug!("Skipping cue with unparsable timing: start={} dur={}", &caps[1], &caps[2]);
                        None
                    }
                }
            })
            .collect()
    }
}
