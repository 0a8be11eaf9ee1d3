/*!
 * Fallback extraction from the page's own `<track>` elements.
 *
 * A page script walks `document.querySelectorAll('track')` and hands over what
 * it sees as a snapshot. No network access and no language selection happen
 * here: the entries reflect whichever subtitle/caption tracks the page exposes.
 */

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::app_config::RetrievalConfig;
use crate::captions::{CaptionEntry, TranscriptSource};
use crate::errors::CaptionError;

/// A single timed cue as exposed by a text track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextCue {
    pub start_time: f64,
    pub end_time: f64,
    pub text: String,
}

/// A `<track>` element and, when loaded, its cue list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaTrackElement {
    /// `subtitles`, `captions`, `chapters`, `descriptions` or `metadata`
    pub kind: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub srclang: Option<String>,
    /// Absent until the browser has loaded the track
    #[serde(default)]
    pub cues: Option<Vec<TextCue>>,
}

impl MediaTrackElement {
    /// Whether the element carries subtitle or caption text
    pub fn is_text_track(&self) -> bool {
        self.kind.eq_ignore_ascii_case("subtitles") || self.kind.eq_ignore_ascii_case("captions")
    }
}

/// Transcript source backed by a snapshot of in-page track elements
#[derive(Debug, Clone, Default)]
pub struct InPageTrackSource {
    tracks: Vec<MediaTrackElement>,
}

impl InPageTrackSource {
    pub fn new(tracks: Vec<MediaTrackElement>) -> Self {
        Self { tracks }
    }

    /// Read a snapshot serialized as a JSON array of track elements
    pub fn from_json(snapshot: &str) -> Result<Self, CaptionError> {
        let tracks: Vec<MediaTrackElement> =
            serde_json::from_str(snapshot).map_err(|e| CaptionError::Snapshot(e.to_string()))?;
        Ok(Self::new(tracks))
    }

    pub fn tracks(&self) -> &[MediaTrackElement] {
        &self.tracks
    }

    /// One entry per cue of every subtitle/caption track, raw text, in snapshot order
    pub fn extract(&self) -> Vec<CaptionEntry> {
        self.tracks
            .iter()
            .filter(|track| track.is_text_track())
            .filter_map(|track| track.cues.as_ref())
            .flatten()
            .map(|cue| CaptionEntry::cue(cue.text.clone(), cue.start_time, cue.end_time))
            .collect()
    }
}

#[async_trait]
impl TranscriptSource for InPageTrackSource {
    fn name(&self) -> &'static str {
        "in-page"
    }

    async fn fetch_captions(&self, _config: &RetrievalConfig) -> Result<Vec<CaptionEntry>, CaptionError> {
        let entries = self.extract();
        debug!("Read {} cue(s) from {} in-page track(s)", entries.len(), self.tracks.len());
        Ok(entries)
    }
}
